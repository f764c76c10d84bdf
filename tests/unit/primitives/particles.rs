use super::*;

fn field() -> ParticleField {
    ParticleField::new(40, Rect::new(0.0, 0.0, 393.0, 852.0), Rgba8::WHITE)
}

#[test]
fn particles_stay_inside_vertical_span() {
    let f = field();
    for frame in [0.0, 17.0, 900.0, 12_345.0] {
        for p in f.particles(frame) {
            assert!((0.0..852.0).contains(&p.position.y), "{p:?}");
            assert!((0.0..=1.0).contains(&p.opacity));
            assert!(p.radius >= 1.0 && p.radius <= 2.6);
        }
    }
}

#[test]
fn sampling_is_stateless() {
    let f = field();
    let late = f.particles(500.0);
    let _ = f.particles(3.0);
    assert_eq!(f.particles(500.0), late);
}

#[test]
fn drift_moves_upward_and_loops() {
    let f = ParticleField {
        sway_px: 0.0,
        speed: [1.0, 1.0],
        ..field()
    };
    let a = f.particle(7, 10.0);
    let b = f.particle(7, 11.0);
    if a.position.y >= 1.0 {
        assert!((a.position.y - b.position.y - 1.0).abs() < 1e-9);
    }
    // One full span later the particle is back where it started.
    let c = f.particle(7, 10.0 + 852.0);
    assert!((a.position.y - c.position.y).abs() < 1e-6);
    assert!((a.position.x - c.position.x).abs() < 1e-9);
}

#[test]
fn golden_angle_spreads_columns() {
    let f = ParticleField {
        sway_px: 0.0,
        ..field()
    };
    let mut xs: Vec<f64> = f.particles(0.0).iter().map(|p| p.position.x).collect();
    xs.sort_by(f64::total_cmp);
    let max_gap = xs.windows(2).map(|w| w[1] - w[0]).fold(0.0, f64::max);
    assert!(max_gap < 393.0 / 8.0, "max gap {max_gap}");
}

#[test]
fn empty_and_degenerate_fields_render() {
    let empty = ParticleField::new(0, Rect::new(0.0, 0.0, 10.0, 10.0), Rgba8::WHITE);
    assert_eq!(empty.render(5.0).count(), 1);

    let flat = ParticleField::new(3, Rect::new(0.0, 50.0, 100.0, 50.0), Rgba8::WHITE);
    for p in flat.particles(99.0) {
        assert_eq!(p.position.y, 50.0);
        assert!(p.opacity.is_finite());
    }
}
