use crate::foundation::core::{Canvas, Point, Rect, Rgba8Premul};
use crate::foundation::error::BoomerangResult;
use crate::render::context::{Context2D, LineCap, StateStack};

/// A drawing operation resolved to device space.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// A filled axis-aligned rectangle (device-space bounds).
    FillRect {
        /// Device-space bounds.
        rect: Rect,
        /// Fill color.
        color: Rgba8Premul,
    },
    /// A stroked path.
    Stroke {
        /// Device-space subpaths, each a polyline.
        subpaths: Vec<Vec<Point>>,
        /// Stroke width.
        width: f64,
        /// Stroke cap.
        cap: LineCap,
        /// Stroke color.
        color: Rgba8Premul,
    },
}

/// [`Context2D`] that records operations instead of rasterizing.
///
/// Each `present` closes a frame; [`RecordingContext::last_frame`] returns the ops of the
/// most recently presented frame.
#[derive(Clone, Debug)]
pub struct RecordingContext {
    canvas: Canvas,
    state: StateStack,
    path: Vec<Vec<Point>>,
    pending: Vec<DrawOp>,
    last: Option<Vec<DrawOp>>,
    presented: usize,
}

impl RecordingContext {
    /// Create an empty recorder for a surface of size `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            state: StateStack::default(),
            path: Vec::new(),
            pending: Vec::new(),
            last: None,
            presented: 0,
        }
    }

    /// Ops recorded since the last `present`.
    pub fn pending(&self) -> &[DrawOp] {
        &self.pending
    }

    /// Ops of the most recently presented frame.
    pub fn last_frame(&self) -> Option<&[DrawOp]> {
        self.last.as_deref()
    }

    /// Number of presented frames.
    pub fn frame_count(&self) -> usize {
        self.presented
    }

    /// Unmatched `save` calls.
    pub fn save_depth(&self) -> usize {
        self.state.depth()
    }
}

impl Context2D for RecordingContext {
    fn size(&self) -> Canvas {
        self.canvas
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.state.map_point(x, y);
        self.path.push(vec![p]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.state.map_point(x, y);
        match self.path.last_mut() {
            Some(sub) => sub.push(p),
            None => self.path.push(vec![p]),
        }
    }

    fn stroke(&mut self) {
        let st = self.state.current();
        self.pending.push(DrawOp::Stroke {
            subpaths: self.path.clone(),
            width: st.line_width,
            cap: st.line_cap,
            color: st.stroke_style,
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let rect = self.state.map_rect(Rect::new(x, y, x + w, y + h));
        self.pending.push(DrawOp::FillRect {
            rect,
            color: self.state.current().fill_style,
        });
    }

    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        self.state.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.state.translate(x, y);
    }

    fn rotate(&mut self, angle: f64) {
        self.state.rotate(angle);
    }

    fn set_stroke_style(&mut self, color: Rgba8Premul) {
        self.state.current_mut().stroke_style = color;
    }

    fn set_fill_style(&mut self, color: Rgba8Premul) {
        self.state.current_mut().fill_style = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.current_mut().line_width = width;
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.state.current_mut().line_cap = cap;
    }

    fn present(&mut self) -> BoomerangResult<()> {
        self.last = Some(std::mem::take(&mut self.pending));
        self.presented += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;
