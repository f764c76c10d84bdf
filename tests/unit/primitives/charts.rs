use super::*;

fn dims() -> Vec<Dimension> {
    vec![
        Dimension::new("Legal reasoning", 82.0),
        Dimension::new("Use of authority", 74.0),
        Dimension::new("Structure", 90.0),
        Dimension::new("Responsiveness", 68.0),
        Dimension::new("Delivery", 77.0),
    ]
}

#[test]
fn score_ring_eases_to_target() {
    let ring = ScoreRing {
        center: Point::new(196.0, 300.0),
        radius: 80.0,
        thickness: 12.0,
        target: 87.0,
        start: 10.0,
        end: 55.0,
        track: Rgba8::rgb(40, 40, 40),
        color: Rgba8::rgb(201, 162, 39),
        label: "Overall".to_string(),
    };
    assert_eq!(ring.value_at(0.0), 0.0);
    assert_eq!(ring.value_at(10.0), 0.0);
    assert_eq!(ring.value_at(55.0), 87.0);
    assert_eq!(ring.value_at(10_000.0), 87.0);
    assert!((ring.sweep_at(55.0) - 313.2).abs() < 1e-9);
    // Cubic ease-out is past the linear midpoint halfway through.
    assert!(ring.value_at(32.5) > 87.0 / 2.0);

    let over = ScoreRing {
        target: 140.0,
        ..ring.clone()
    };
    assert_eq!(over.value_at(60.0), 100.0);

    let node = ring.render(55.0);
    let Some(value) = node.find("ring-value") else {
        panic!("missing value text");
    };
    let NodeKind::Text(t) = &value.kind else {
        panic!("expected text");
    };
    assert_eq!(t.text, "87");
}

#[test]
fn radar_vertices_are_evenly_spaced() {
    let radar = RadarChart {
        center: Point::new(200.0, 400.0),
        radius: 100.0,
        dimensions: dims(),
        start: 0.0,
        end: 30.0,
        stagger: 4.0,
        grid_rings: 4,
        grid: Rgba8::WHITE,
        color: Rgba8::rgb(201, 162, 39),
    };
    let settled = radar.vertices(100.0);
    assert_eq!(settled.len(), 5);
    // Axis 0 points straight up.
    assert!((settled[0].x - 200.0).abs() < 1e-9);
    assert!((settled[0].y - (400.0 - 82.0)).abs() < 1e-9);
    for (i, (p, d)) in settled.iter().zip(dims()).enumerate() {
        let v = *p - radar.center;
        assert!((v.hypot() - d.target_score).abs() < 1e-9);
        let expected = (i as f64 * 72.0 - 90.0).to_radians();
        assert!((v.x - d.target_score * expected.cos()).abs() < 1e-9);
        assert!((v.y - d.target_score * expected.sin()).abs() < 1e-9);
    }

    let collapsed = radar.vertices(0.0);
    assert!(collapsed.iter().all(|p| *p == radar.center));

    // Stagger: the last axis lags the first.
    assert_eq!(radar.value_at(0, 30.0), 82.0);
    assert!(radar.value_at(4, 30.0) < 77.0);
    assert_eq!(radar.value_at(9, 30.0), 0.0);
}

#[test]
fn bars_grow_with_stagger() {
    let bars = BarChart {
        origin: Point::new(30.0, 500.0),
        width: 300.0,
        bar_height: 8.0,
        row_height: 44.0,
        dimensions: dims(),
        start: 20.0,
        duration: 30.0,
        stagger: 6.0,
        track: Rgba8::rgb(40, 40, 40),
        color: Rgba8::rgb(201, 162, 39),
        label: Rgba8::WHITE,
    };
    assert_eq!(bars.fill_width(0, 20.0), 0.0);
    assert_eq!(bars.fill_width(0, 50.0), 246.0);
    assert!(bars.fill_width(3, 50.0) < 204.0);
    assert_eq!(bars.fill_width(3, 68.0), 204.0);

    let node = bars.render(0.0);
    assert_eq!(node.children().len(), 5);
    assert_eq!(node.find("bar-0").map(|n| n.opacity), Some(0.0));
}

#[test]
fn empty_and_nan_inputs_are_inert() {
    let radar = RadarChart {
        center: Point::ORIGIN,
        radius: 50.0,
        dimensions: vec![],
        start: 0.0,
        end: 10.0,
        stagger: 0.0,
        grid_rings: 3,
        grid: Rgba8::WHITE,
        color: Rgba8::WHITE,
    };
    assert!(radar.vertices(5.0).is_empty());
    let _ = radar.render(5.0);

    assert_eq!(Dimension::new("x", f64::NAN).target(), 0.0);
}
