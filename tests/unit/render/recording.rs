use super::*;

fn canvas() -> Canvas {
    Canvas {
        width: 100,
        height: 50,
    }
}

#[test]
fn stroke_captures_device_space_polyline() {
    let mut ctx = RecordingContext::new(canvas());
    ctx.set_line_width(2.0);
    ctx.translate(10.0, 0.0);
    ctx.begin_path();
    ctx.move_to(0.0, 0.0);
    ctx.line_to(5.0, 5.0);
    ctx.stroke();

    let [DrawOp::Stroke {
        subpaths, width, ..
    }] = ctx.pending()
    else {
        panic!("expected a single stroke, got {:?}", ctx.pending());
    };
    assert_eq!(*width, 2.0);
    assert_eq!(
        subpaths,
        &vec![vec![Point::new(10.0, 0.0), Point::new(15.0, 5.0)]]
    );
}

#[test]
fn present_closes_frames() {
    let mut ctx = RecordingContext::new(canvas());
    ctx.set_fill_style(Rgba8Premul::from_straight_rgba(1, 2, 3, 255));
    ctx.fill_rect(0.0, 0.0, 100.0, 50.0);
    ctx.present().unwrap();
    assert!(ctx.pending().is_empty());
    assert_eq!(ctx.frame_count(), 1);
    assert_eq!(
        ctx.last_frame().unwrap(),
        &[DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 100.0, 50.0),
            color: Rgba8Premul::from_straight_rgba(1, 2, 3, 255),
        }]
    );
}

#[test]
fn begin_path_discards_previous_points() {
    let mut ctx = RecordingContext::new(canvas());
    ctx.move_to(1.0, 1.0);
    ctx.line_to(2.0, 2.0);
    ctx.begin_path();
    ctx.move_to(3.0, 3.0);
    ctx.stroke();
    let DrawOp::Stroke { subpaths, .. } = &ctx.pending()[0] else {
        panic!("expected stroke");
    };
    assert_eq!(subpaths, &vec![vec![Point::new(3.0, 3.0)]]);
}
