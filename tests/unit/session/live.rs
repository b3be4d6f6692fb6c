use super::*;
use crate::animation::chain::Traversal;

fn player() -> LivePlayer {
    LivePlayer::new(StageOpts::with_size(90, 180)).unwrap()
}

#[test]
fn runs_the_requested_number_of_ticks() {
    let mut p = player();
    p.run_for_ticks(5).unwrap();
    assert_eq!(p.stage().ticks(), 5);
    assert!(!p.is_running());
    let st = p.stage().chain().state(0).unwrap();
    assert!((st.scale() - 0.1).abs() < 1e-9);
    assert_eq!(p.stage().chain().direction(), Traversal::Forward);
}

#[test]
fn stop_freezes_state_and_canvas() {
    let mut p = player();
    assert!(p.start().unwrap());
    assert!(!p.start().unwrap(), "second start is ignored");
    while p.stage().ticks() < 3 {
        p.dispatch(Some(Duration::from_millis(50))).unwrap();
    }
    assert!(p.stop());

    let ticks = p.stage().ticks();
    let snap = p.stage().chain().snapshot();
    let frame = p.frame();
    for _ in 0..3 {
        p.dispatch(Some(Duration::from_millis(30))).unwrap();
    }
    assert_eq!(p.stage().ticks(), ticks);
    assert_eq!(p.stage().chain().snapshot(), snap);
    assert_eq!(p.frame(), frame);
    assert!(!p.stop());
}
