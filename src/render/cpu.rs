use crate::config::MAX_PIXELS;
use crate::foundation::core::{Affine, Canvas, Point, Rect, Rgba8Premul};
use crate::foundation::error::{BoomerangError, BoomerangResult};
use crate::render::backend::FrameRGBA;
use crate::render::context::{Context2D, LineCap, StateStack};

/// CPU raster surface powered by `vello_cpu`.
///
/// Draw calls are queued on a `vello_cpu::RenderContext` and rasterized into the backing
/// pixmap on [`Context2D::present`]. Path points are stored in device space, so strokes are
/// issued with an identity transform and line widths are in device pixels.
pub struct CpuContext {
    canvas: Canvas,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    state: StateStack,
    path: vello_cpu::kurbo::BezPath,
}

impl std::fmt::Debug for CpuContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuContext")
            .field("canvas", &self.canvas)
            .field("save_depth", &self.state.depth())
            .finish_non_exhaustive()
    }
}

impl CpuContext {
    /// Allocate a surface of size `canvas`.
    ///
    /// Fails when either side is zero or exceeds `u16::MAX`.
    pub fn new(canvas: Canvas) -> BoomerangResult<Self> {
        let (w, h) = surface_dims(canvas)?;
        Ok(Self {
            canvas,
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
            state: StateStack::default(),
            path: vello_cpu::kurbo::BezPath::new(),
        })
    }

    /// Copy the last presented frame.
    pub fn frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    /// Unmatched `save` calls.
    pub fn save_depth(&self) -> usize {
        self.state.depth()
    }
}

fn surface_dims(canvas: Canvas) -> BoomerangResult<(u16, u16)> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(BoomerangError::surface(format!(
            "canvas must be non-empty, got {}x{}",
            canvas.width, canvas.height
        )));
    }
    let w = u16::try_from(canvas.width)
        .map_err(|_| BoomerangError::surface(format!("canvas width {} too large", canvas.width)))?;
    let h = u16::try_from(canvas.height).map_err(|_| {
        BoomerangError::surface(format!("canvas height {} too large", canvas.height))
    })?;
    if u64::from(w) * u64::from(h) > MAX_PIXELS {
        return Err(BoomerangError::surface(format!(
            "canvas {w}x{h} exceeds {MAX_PIXELS} pixels"
        )));
    }
    Ok((w, h))
}

impl Context2D for CpuContext {
    fn size(&self) -> Canvas {
        self.canvas
    }

    fn begin_path(&mut self) {
        self.path = vello_cpu::kurbo::BezPath::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.state.map_point(x, y);
        self.path.move_to(point_to_cpu(p));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = point_to_cpu(self.state.map_point(x, y));
        if self.path.elements().is_empty() {
            self.path.move_to(p);
        } else {
            self.path.line_to(p);
        }
    }

    fn stroke(&mut self) {
        if self.path.elements().is_empty() {
            return;
        }
        let st = *self.state.current();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(st.stroke_style));
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(st.line_width).with_caps(cap_to_cpu(st.line_cap)),
        );
        self.ctx.stroke_path(&self.path);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let st = *self.state.current();
        self.ctx.set_transform(affine_to_cpu(st.transform));
        self.ctx.set_paint(color_to_cpu(st.fill_style));
        self.ctx.fill_rect(&rect_to_cpu(Rect::new(x, y, x + w, y + h)));
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
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        self.ctx.reset();
        Ok(())
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn color_to_cpu(c: Rgba8Premul) -> vello_cpu::peniko::Color {
    // peniko colors are straight alpha.
    fn unpremul(c: u8, a: u8) -> u8 {
        if a == 0 {
            return 0;
        }
        ((u16::from(c) * 255 + u16::from(a) / 2) / u16::from(a)).min(255) as u8
    }
    vello_cpu::peniko::Color::from_rgba8(
        unpremul(c.r, c.a),
        unpremul(c.g, c.a),
        unpremul(c.b, c.a),
        c.a,
    )
}

fn cap_to_cpu(cap: LineCap) -> vello_cpu::kurbo::Cap {
    match cap {
        LineCap::Butt => vello_cpu::kurbo::Cap::Butt,
        LineCap::Round => vello_cpu::kurbo::Cap::Round,
        LineCap::Square => vello_cpu::kurbo::Cap::Square,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
