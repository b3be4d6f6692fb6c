use super::*;
use std::time::Duration;

#[test]
fn tick_range_rejects_inverted_bounds() {
    assert!(TickRange::new(TickIndex(3), TickIndex(2)).is_err());
    let r = TickRange::new(TickIndex(2), TickIndex(5)).unwrap();
    assert_eq!(r.len_ticks(), 3);
    assert!(TickRange::new(TickIndex(4), TickIndex(4)).unwrap().is_empty());
}

#[test]
fn fps_from_twenty_ms_interval_is_fifty() {
    let fps = Fps::from_interval(Duration::from_millis(20)).unwrap();
    assert_eq!(fps.as_f64(), 50.0);
    assert_eq!(fps.frames_to_secs(500), 10.0);
    assert!(Fps::from_interval(Duration::ZERO).is_err());
}

#[test]
fn premul_rounds_half_up() {
    let c = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(c.to_array(), [128, 64, 0, 128]);
    let opaque = Rgba8Premul::from_straight_rgba(0xFF, 0x57, 0x22, 255);
    assert_eq!(opaque.to_array(), [0xFF, 0x57, 0x22, 255]);
}

#[test]
fn canvas_rect_spans_full_surface() {
    let c = Canvas {
        width: 320,
        height: 200,
    };
    assert_eq!(c.rect(), Rect::new(0.0, 0.0, 320.0, 200.0));
}
