use super::*;
use crate::foundation::core::Fps;

fn solid(width: u32, height: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: px.repeat((width * height) as usize),
        premultiplied: true,
    }
}

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::new(50, 1).unwrap(),
    }
}

#[test]
fn writes_numbered_frames_that_decode_back() {
    let dir = PathBuf::from("target").join("png_sink_unit");
    let _ = std::fs::remove_dir_all(&dir);
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg(4, 3)).unwrap();
    sink.push_frame(TickIndex(0), &solid(4, 3, [10, 20, 30, 255]))
        .unwrap();
    sink.push_frame(TickIndex(7), &solid(4, 3, [40, 50, 60, 255]))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 2);
    let second = sink.frame_path(TickIndex(7));
    assert!(second.ends_with("frame_00007.png"));
    let img = image::open(&second).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 3));
    assert_eq!(img.get_pixel(2, 1).0, [40, 50, 60, 255]);
}

#[test]
fn rejects_out_of_order_and_mismatched_frames() {
    let dir = PathBuf::from("target").join("png_sink_unit_order");
    let mut sink = PngSequenceSink::new(&dir);
    assert!(
        sink.push_frame(TickIndex(0), &solid(2, 2, [0; 4]))
            .is_err(),
        "push before begin"
    );
    sink.begin(cfg(2, 2)).unwrap();
    sink.push_frame(TickIndex(3), &solid(2, 2, [0, 0, 0, 255]))
        .unwrap();
    assert!(
        sink.push_frame(TickIndex(3), &solid(2, 2, [0, 0, 0, 255]))
            .is_err()
    );
    assert!(
        sink.push_frame(TickIndex(4), &solid(3, 2, [0, 0, 0, 255]))
            .is_err()
    );
}
