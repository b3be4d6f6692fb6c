use super::*;
use crate::animation::chain::Traversal;
use crate::render::recording::{DrawOp, RecordingContext};
use crate::tunables::GLYPH_COUNT;

fn recording_stage() -> Stage<RecordingContext> {
    let opts = StageOpts::with_size(300, 600);
    Stage::new(RecordingContext::new(opts.canvas), opts).unwrap()
}

#[test]
fn surface_size_must_match_options() {
    let ctx = RecordingContext::new(Canvas {
        width: 10,
        height: 10,
    });
    let err = Stage::new(ctx, StageOpts::with_size(20, 10)).unwrap_err();
    assert!(matches!(err, BoomerangError::Surface(_)));
}

#[test]
fn render_clears_then_draws_every_glyph() {
    let mut stage = recording_stage();
    stage.render().unwrap();

    let ops = stage.context().last_frame().unwrap();
    assert_eq!(ops.len(), 1 + 2 * GLYPH_COUNT);
    let DrawOp::FillRect { rect, color } = &ops[0] else {
        panic!("first op must clear the background");
    };
    assert_eq!(*rect, stage.canvas().rect());
    assert_eq!(color.to_array(), [0xBD, 0xBD, 0xBD, 0xFF]);
    assert!(
        ops[1..]
            .iter()
            .all(|op| matches!(op, DrawOp::Stroke { .. }))
    );
    assert_eq!(stage.context().save_depth(), 0);
}

#[test]
fn ticks_before_tap_only_redraw() {
    let mut stage = recording_stage();
    for _ in 0..5 {
        assert_eq!(stage.tick().unwrap(), ChainUpdate::Idle);
    }
    assert_eq!(stage.ticks(), 5);
    assert_eq!(stage.context().frame_count(), 5);
    assert!(stage.chain().states().iter().all(|s| s.scale() == 0.0));
}

#[test]
fn tap_starts_once() {
    let mut stage = recording_stage();
    assert!(stage.handle_tap());
    assert!(!stage.handle_tap());
    assert_eq!(stage.tick().unwrap(), ChainUpdate::Progressing);
}

#[test]
fn completion_rearms_the_next_glyph() {
    let mut stage = recording_stage();
    stage.handle_tap();
    for _ in 0..49 {
        stage.tick().unwrap();
    }
    let ChainUpdate::Completed(c) = stage.tick().unwrap() else {
        panic!("fiftieth tick must complete the first glyph");
    };
    assert_eq!(c.glyph, 0);
    assert_eq!(stage.chain().cursor(), 1);
    assert_eq!(stage.chain().direction(), Traversal::Forward);
    assert_eq!(stage.chain().state(1).unwrap().dir(), 1);
}
