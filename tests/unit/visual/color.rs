use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    assert_eq!(Rgba8::hex("#C9A227").unwrap(), Rgba8::rgb(0xc9, 0xa2, 0x27));
    assert_eq!(
        Rgba8::hex("0000ff80").unwrap(),
        Rgba8::rgba(0, 0, 255, 0x80)
    );
    assert!(Rgba8::hex("#12345").is_err());
    assert!(Rgba8::hex("#zzzzzz").is_err());
}

#[test]
fn serde_accepts_every_repr_and_writes_hex() {
    let c: Rgba8 = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgba8::rgb(255, 0, 0));
    let c: Rgba8 = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(c, Rgba8::rgb(1, 2, 3));
    let c: Rgba8 = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3, "a": 4})).unwrap();
    assert_eq!(c, Rgba8::rgba(1, 2, 3, 4));

    assert_eq!(
        serde_json::to_value(Rgba8::rgba(255, 16, 0, 128)).unwrap(),
        json!("#ff100080")
    );
}

#[test]
fn fade_scales_alpha_only() {
    let c = Rgba8::rgb(10, 20, 30).fade(0.5);
    assert_eq!((c.r, c.g, c.b, c.a), (10, 20, 30, 128));
    assert_eq!(Rgba8::WHITE.fade(f64::NAN).a, 0);
    assert_eq!(Rgba8::WHITE.fade(3.0).a, 255);
}

#[test]
fn lerp_endpoints() {
    let a = Rgba8::BLACK;
    let b = Rgba8::WHITE;
    assert_eq!(Rgba8::lerp(a, b, 0.0), a);
    assert_eq!(Rgba8::lerp(a, b, 1.0), b);
    assert_eq!(Rgba8::lerp(a, b, 0.5).r, 128);
}
