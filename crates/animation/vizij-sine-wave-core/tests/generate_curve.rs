use approx::assert_relative_eq;
use vizij_sine_wave::{
    clear_all, clear_section, generate, AnimationHost, BoundaryTangents, Config, Frame,
    GenerationError, InMemoryHost, Keyer, Tangents, Target, WaveParameters,
};

fn target() -> Target {
    Target::new("pCube1", "translateY")
}

fn wave(start: Frame, end: Frame) -> WaveParameters {
    WaveParameters {
        start_frame: start,
        end_frame: end,
        wavelength: 10.0,
        phase_degrees: 0.0,
        amplitude: 5.0,
        offset: 0.0,
    }
}

/// Angle the reference host assigns to a key with both neighbours present.
fn neighbour_angle(p: &WaveParameters, frame: Frame) -> f64 {
    let slope = (p.value_at(frame + 1) - p.value_at(frame - 1)) / 2.0;
    slope.atan().to_degrees()
}

#[test]
fn one_key_per_frame_and_nothing_outside() {
    let mut host = InMemoryHost::new();
    let p = wave(1, 20);
    generate(&mut host, &target(), &p).unwrap();

    let frames: Vec<Frame> = host.keyframes(&target()).iter().map(|k| k.frame).collect();
    assert_eq!(frames, (1..=20).collect::<Vec<_>>());
    let curve = host.curve(&target()).expect("curve");
    assert!(curve.value(0).is_none());
    assert!(curve.value(21).is_none());
}

#[test]
fn values_match_the_sine_formula() {
    let mut host = InMemoryHost::new();
    let p = WaveParameters {
        start_frame: -7,
        end_frame: 33,
        wavelength: 13.5,
        phase_degrees: 45.0,
        amplitude: -2.5,
        offset: 1.25,
    };
    generate(&mut host, &target(), &p).unwrap();
    for key in host.keyframes(&target()) {
        let x = (key.frame - p.start_frame) as f64;
        let expected = p.amplitude
            * (std::f64::consts::TAU / p.wavelength * x + p.phase_degrees.to_radians()).sin()
            + p.offset;
        assert_relative_eq!(key.value, expected, epsilon = 1e-9);
    }
}

#[test]
fn worked_example_values() {
    let mut host = InMemoryHost::new();
    generate(&mut host, &target(), &wave(1, 20)).unwrap();
    let curve = host.curve(&target()).unwrap();
    assert_relative_eq!(curve.value(1).unwrap(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(curve.value(6).unwrap(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(curve.value(3).unwrap(), 4.755_282_581_475_767, epsilon = 1e-9);
}

#[test]
fn end_tangent_is_frozen_before_trim() {
    let mut host = InMemoryHost::new();
    let p = wave(1, 20);
    generate(&mut host, &target(), &p).unwrap();

    let expected = neighbour_angle(&p, 20);
    assert!(expected.abs() > 1.0, "test wave should not be flat at the end");
    let t = host.get_tangents(&target(), 20).unwrap();
    assert_relative_eq!(t.in_angle, expected, epsilon = 1e-9);
    assert_relative_eq!(t.out_angle, expected, epsilon = 1e-9);
    assert!(host.curve(&target()).unwrap().is_pinned(20));
}

#[test]
fn start_tangent_left_to_host_by_default() {
    let mut host = InMemoryHost::new();
    generate(&mut host, &target(), &wave(1, 20)).unwrap();
    // Edge key after trimming: the reference host flattens it.
    assert_eq!(
        host.get_tangents(&target(), 1).unwrap(),
        Tangents::smooth(0.0)
    );
    assert!(!host.curve(&target()).unwrap().is_pinned(1));
}

#[test]
fn symmetric_policy_restores_start_tangent_too() {
    let keyer = Keyer::new(Config {
        boundary_tangents: BoundaryTangents::Both,
        ..Config::default()
    });
    let mut host = InMemoryHost::new();
    let p = wave(1, 20);
    keyer.generate(&mut host, &target(), &p).unwrap();

    let t = host.get_tangents(&target(), 1).unwrap();
    assert_relative_eq!(t.in_angle, neighbour_angle(&p, 1), epsilon = 1e-9);
    let t = host.get_tangents(&target(), 20).unwrap();
    assert_relative_eq!(t.out_angle, neighbour_angle(&p, 20), epsilon = 1e-9);
    assert_eq!(host.keyframes(&target()).len(), 20);
}

#[test]
fn invalid_range_leaves_curve_untouched() {
    let mut host = InMemoryHost::new();
    generate(&mut host, &target(), &wave(100, 110)).unwrap();
    let before = host.keyframes(&target());

    for (s, e) in [(5, 5), (9, 3)] {
        assert_eq!(
            generate(&mut host, &target(), &wave(s, e)),
            Err(GenerationError::InvalidRange { start: s, end: e })
        );
        assert_eq!(host.keyframes(&target()), before);
    }
}

#[test]
fn regenerating_overwrites_existing_keys() {
    let mut host = InMemoryHost::new();
    generate(&mut host, &target(), &wave(1, 20)).unwrap();
    let mut louder = wave(1, 20);
    louder.amplitude = 10.0;
    generate(&mut host, &target(), &louder).unwrap();

    let keys = host.keyframes(&target());
    assert_eq!(keys.len(), 20);
    assert_relative_eq!(keys[2].value, louder.value_at(3), epsilon = 1e-12);
}

#[test]
fn clear_section_is_inclusive() {
    let mut host = InMemoryHost::new();
    generate(&mut host, &target(), &wave(1, 20)).unwrap();
    clear_section(&mut host, &target(), 5, 10).unwrap();

    let frames: Vec<Frame> = host.keyframes(&target()).iter().map(|k| k.frame).collect();
    let expected: Vec<Frame> = (1..=4).chain(11..=20).collect();
    assert_eq!(frames, expected);
}

#[test]
fn clear_all_removes_everything() {
    let mut host = InMemoryHost::new();
    let other = Target::new("pCube1", "rotateZ");
    generate(&mut host, &target(), &wave(1, 20)).unwrap();
    generate(&mut host, &other, &wave(1, 5)).unwrap();

    clear_all(&mut host, &target()).unwrap();
    assert!(host.keyframes(&target()).is_empty());
    assert_eq!(host.keyframes(&other).len(), 5);
}
