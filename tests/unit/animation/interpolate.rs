use super::*;

const EASES: [Ease; 4] = [
    Ease::Linear,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InOutSine,
];

#[test]
fn clamps_exactly_outside_the_input_range() {
    for easing in EASES {
        let opts = InterpolateOpts::eased(easing);
        for f in [-500.0, -1.0, 0.0, 10.0] {
            assert_eq!(interpolate(f, &[10.0, 40.0], &[3.0, -7.0], opts), 3.0);
        }
        for f in [40.0, 41.0, 9_999.0, f64::INFINITY] {
            assert_eq!(interpolate(f, &[10.0, 40.0], &[3.0, -7.0], opts), -7.0);
        }
    }
}

#[test]
fn linear_midpoint() {
    let v = interpolate(15.0, &[10.0, 20.0], &[0.0, 100.0], InterpolateOpts::default());
    assert_eq!(v, 50.0);
}

#[test]
fn piecewise_breakpoints_hold_plateau() {
    let input = [0.0, 20.0, 80.0, 100.0];
    let output = [0.0, 1.0, 1.0, 0.0];
    let opts = InterpolateOpts::default();
    assert_eq!(interpolate(10.0, &input, &output, opts), 0.5);
    assert_eq!(interpolate(50.0, &input, &output, opts), 1.0);
    assert_eq!(interpolate(90.0, &input, &output, opts), 0.5);
    assert_eq!(interpolate(20.0, &input, &output, opts), 1.0);
}

#[test]
fn extend_and_identity_extrapolation() {
    let opts = InterpolateOpts {
        extrapolate_left: Extrapolate::Identity,
        extrapolate_right: Extrapolate::Extend,
        easing: Ease::Linear,
    };
    assert_eq!(interpolate(-4.0, &[0.0, 10.0], &[0.0, 20.0], opts), -4.0);
    assert_eq!(interpolate(15.0, &[0.0, 10.0], &[0.0, 20.0], opts), 30.0);
}

#[test]
fn degenerate_inputs_never_panic() {
    let opts = InterpolateOpts::default();
    assert_eq!(interpolate(1.0, &[], &[], opts), 0.0);
    assert_eq!(interpolate(1.0, &[5.0], &[9.0], opts), 9.0);
    assert_eq!(interpolate(1.0, &[0.0, 2.0, 4.0], &[0.0, 1.0], opts), 0.5);
    assert_eq!(interpolate(f64::NAN, &[0.0, 1.0], &[4.0, 8.0], opts), 4.0);
    // Zero-width interior segment jumps to its end value.
    assert_eq!(
        interpolate(5.0, &[0.0, 5.0, 5.0, 10.0], &[0.0, 1.0, 2.0, 3.0], opts),
        2.0
    );
    // Zero-width overall window is a frozen step.
    assert_eq!(interpolate(7.0, &[7.0, 7.0], &[1.0, 2.0], opts), 1.0);
    assert_eq!(interpolate(7.5, &[7.0, 7.0], &[1.0, 2.0], opts), 2.0);
}

#[test]
fn ease_helper_reaches_target() {
    assert_eq!(ease(0.0, 0.0, 87.0, 10.0, 70.0), 0.0);
    assert_eq!(ease(70.0, 0.0, 87.0, 10.0, 70.0), 87.0);
    assert_eq!(ease(500.0, 0.0, 87.0, 10.0, 70.0), 87.0);
    let mid = ease(40.0, 0.0, 87.0, 10.0, 70.0);
    assert!(mid > 43.5 && mid < 87.0);
}

#[test]
fn clamp01_and_progress_guards() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(-0.5), 0.0);
    assert_eq!(clamp01(1.5), 1.0);
    assert_eq!(progress(5.0, 10.0, 0.0), 0.0);
    assert_eq!(progress(10.0, 10.0, 0.0), 1.0);
    assert_eq!(progress(15.0, 10.0, 10.0), 0.5);
}
