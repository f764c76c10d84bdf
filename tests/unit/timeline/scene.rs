use super::*;

fn scenario() -> Scene {
    Scene::new("intro", 100, 200, 10)
}

#[test]
fn scenario_visibility_edges() {
    let s = scenario();
    assert!(s.is_visible(FrameIndex(95)));
    assert!(s.is_visible(FrameIndex(305)));
    assert!(!s.is_visible(FrameIndex(89)));
    assert!(!s.is_visible(FrameIndex(311)));
}

#[test]
fn visibility_is_exactly_the_buffered_window() {
    let s = scenario();
    for f in 0..400u64 {
        let expected = (90..=310).contains(&f);
        assert_eq!(s.is_visible(FrameIndex(f)), expected, "frame {f}");
    }
}

#[test]
fn scenario_fade_values() {
    let s = scenario();
    assert_eq!(s.fade(FrameIndex(125)), 1.0);
    let v = s.fade(FrameIndex(295));
    assert!(v > 0.0 && v < 1.0);
    assert_eq!(v, 0.5);
}

#[test]
fn fade_shape() {
    let s = scenario();
    assert_eq!(s.fade(FrameIndex(90)), 0.0);
    assert_eq!(s.fade(FrameIndex(100)), 0.0);
    assert_eq!(s.fade(FrameIndex(125)), 1.0);
    for f in 125..=290 {
        assert_eq!(s.fade(FrameIndex(f)), 1.0, "frame {f}");
    }
    assert_eq!(s.fade(FrameIndex(300)), 0.0);
    assert_eq!(s.fade(FrameIndex(310)), 0.0);

    let mut prev = 0.0;
    for f in 90..=125 {
        let v = s.fade(FrameIndex(f));
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn zero_crossfade_is_a_hard_cut() {
    let s = Scene::new("cut", 0, 50, 0);
    assert_eq!(s.fade(FrameIndex(50)), 1.0);
    assert_eq!(s.fade(FrameIndex(51)), 0.0);
}

#[test]
fn crossfade_overlap_is_bounded_and_monotonic() {
    let a = Scene::new("a", 0, 120, 20);
    let b = Scene::new("b", 100, 120, 20);
    let mut prev_a = f64::INFINITY;
    let mut prev_b = f64::NEG_INFINITY;
    for f in 100..=120u64 {
        let fa = a.fade(FrameIndex(f));
        let fb = b.fade(FrameIndex(f));
        assert!((0.0..=1.0).contains(&fa));
        assert!((0.0..=1.0).contains(&fb));
        assert!(fa <= prev_a);
        assert!(fb >= prev_b);
        prev_a = fa;
        prev_b = fb;
    }
}

#[test]
fn state_at_matches_parts() {
    let s = scenario();
    assert!(s.state_at(FrameIndex(50)).is_none());
    let st = s.state_at(FrameIndex(95)).unwrap();
    assert_eq!(st.local_frame, -5);
    assert_eq!(st.opacity, 0.0);
    assert_eq!(s.end(), 300);
}

#[test]
fn malformed_scene_never_panics() {
    let s = Scene::new("bad", 10, 0, 0);
    assert!(s.is_visible(FrameIndex(10)));
    assert_eq!(s.fade(FrameIndex(10)), 0.0);
    let s = Scene::new("neg", 10, -5, 3);
    assert_eq!(s.fade(FrameIndex(12)), 0.0);
}

#[test]
fn extreme_windows_do_not_overflow() {
    let long = Scene::new("long", 0, i64::MAX, 0);
    assert!(long.is_visible(FrameIndex(5)));
    assert_eq!(long.end(), i64::MAX);
    assert_eq!(long.local_frame(FrameIndex(5)), 5);
    assert!((long.fade(FrameIndex(5)) - 0.2).abs() < 1e-12);

    let early = Scene::new("early", i64::MIN, i64::MAX, 0);
    assert_eq!(early.end(), -1);
    assert!(!early.is_visible(FrameIndex(5)));
    assert!(early.state_at(FrameIndex(5)).is_none());
    assert_eq!(early.local_frame(FrameIndex(5)), i64::MAX);

    let late = Scene::new("late", i64::MAX, i64::MAX, 5);
    assert_eq!(late.end(), i64::MAX);
    assert!(late.is_visible(FrameIndex(u64::MAX)));
    assert!(!late.is_visible(FrameIndex(0)));
}
