use crate::foundation::core::{Affine, Canvas, Point, Rect, Rgba8Premul, Vec2};
use crate::foundation::error::BoomerangResult;

/// Shape drawn at the ends of stroked lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum LineCap {
    /// Flat end exactly at the endpoint.
    #[default]
    Butt,
    /// Semicircular end.
    Round,
    /// Square end extended by half the line width.
    Square,
}

/// Immediate-mode 2D drawing surface modelled on an HTML canvas context.
///
/// Transforms compose onto the current transform (`translate`, then `rotate`, applies the
/// rotation in the translated frame). Path points are mapped through the transform current at
/// the time they are added.
pub trait Context2D {
    /// Surface dimensions.
    fn size(&self) -> Canvas;

    /// Discard the current path.
    fn begin_path(&mut self);
    /// Start a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);
    /// Extend the current subpath to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);
    /// Stroke the current path with the current stroke style, width and cap.
    fn stroke(&mut self);
    /// Fill a rectangle with the current fill style.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Push transform and styles.
    fn save(&mut self);
    /// Pop transform and styles; a restore without a matching save is ignored.
    fn restore(&mut self);
    /// Compose a translation onto the current transform.
    fn translate(&mut self, x: f64, y: f64);
    /// Compose a rotation (radians, clockwise in y-down space) onto the current transform.
    fn rotate(&mut self, angle: f64);

    /// Set the stroke color.
    fn set_stroke_style(&mut self, color: Rgba8Premul);
    /// Set the fill color.
    fn set_fill_style(&mut self, color: Rgba8Premul);
    /// Set the stroke width in user units.
    fn set_line_width(&mut self, width: f64);
    /// Set the stroke cap.
    fn set_line_cap(&mut self, cap: LineCap);

    /// End-of-frame hook; surfaces that batch work rasterize here.
    fn present(&mut self) -> BoomerangResult<()> {
        Ok(())
    }
}

/// Transform and style state saved by [`Context2D::save`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawState {
    /// Current transform (user space to device space).
    pub transform: Affine,
    /// Stroke color.
    pub stroke_style: Rgba8Premul,
    /// Fill color.
    pub fill_style: Rgba8Premul,
    /// Stroke width.
    pub line_width: f64,
    /// Stroke cap.
    pub line_cap: LineCap,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            stroke_style: Rgba8Premul::black(),
            fill_style: Rgba8Premul::black(),
            line_width: 1.0,
            line_cap: LineCap::Butt,
        }
    }
}

/// Current [`DrawState`] plus the save stack, shared by surface implementations.
#[derive(Clone, Debug, Default)]
pub struct StateStack {
    current: DrawState,
    saved: Vec<DrawState>,
}

impl StateStack {
    /// The active state.
    pub fn current(&self) -> &DrawState {
        &self.current
    }

    /// Mutable access to the active state.
    pub fn current_mut(&mut self) -> &mut DrawState {
        &mut self.current
    }

    /// Number of unmatched saves.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Push a copy of the active state.
    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Pop the last saved state; no-op on an empty stack.
    pub fn restore(&mut self) {
        if let Some(s) = self.saved.pop() {
            self.current = s;
        }
    }

    /// Post-multiply a translation.
    pub fn translate(&mut self, x: f64, y: f64) {
        self.current.transform *= Affine::translate(Vec2::new(x, y));
    }

    /// Post-multiply a rotation.
    pub fn rotate(&mut self, angle: f64) {
        self.current.transform *= Affine::rotate(angle);
    }

    /// Map a user-space point into device space.
    pub fn map_point(&self, x: f64, y: f64) -> Point {
        self.current.transform * Point::new(x, y)
    }

    /// Map a user-space rectangle's corners and return their device-space bounds.
    pub fn map_rect(&self, rect: Rect) -> Rect {
        self.current.transform.transform_rect_bbox(rect)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/context.rs"]
mod tests;
