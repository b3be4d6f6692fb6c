use super::*;
use std::f64::consts::PI;

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn translate_then_rotate_rotates_in_translated_frame() {
    let mut st = StateStack::default();
    st.translate(10.0, 20.0);
    st.rotate(PI / 2.0);
    // (1, 0) rotated a quarter turn in y-down space lands on (0, 1).
    assert!(close(st.map_point(1.0, 0.0), Point::new(10.0, 21.0)));
}

#[test]
fn save_restore_round_trips_transform_and_style() {
    let mut st = StateStack::default();
    st.current_mut().line_width = 3.0;
    st.save();
    st.translate(5.0, 5.0);
    st.current_mut().line_width = 9.0;
    st.current_mut().line_cap = LineCap::Round;
    assert_eq!(st.depth(), 1);
    st.restore();
    assert_eq!(st.depth(), 0);
    assert_eq!(st.current().transform, Affine::IDENTITY);
    assert_eq!(st.current().line_width, 3.0);
    assert_eq!(st.current().line_cap, LineCap::Butt);
}

#[test]
fn unmatched_restore_is_ignored() {
    let mut st = StateStack::default();
    st.translate(1.0, 2.0);
    st.restore();
    assert!(close(st.map_point(0.0, 0.0), Point::new(1.0, 2.0)));
}

#[test]
fn map_rect_follows_translation() {
    let mut st = StateStack::default();
    st.translate(3.0, 4.0);
    let r = st.map_rect(Rect::new(0.0, 0.0, 10.0, 5.0));
    assert_eq!(r, Rect::new(3.0, 4.0, 13.0, 9.0));
}
