use crate::animation::chain::{ChainUpdate, GlyphChain};
use crate::config::StageOpts;
use crate::foundation::color::Palette;
use crate::foundation::core::Canvas;
use crate::foundation::error::{BoomerangError, BoomerangResult};
use crate::render::context::Context2D;
use crate::render::cpu::CpuContext;
use crate::render::glyph::GlyphLayout;

/// Owns the drawing surface and the glyph chain, and turns ticks into frames.
///
/// Each [`Stage::tick`] performs exactly one chain update followed by one full redraw. After a
/// glyph completes, the glyph now under the cursor is started right away, so once triggered the
/// sweep runs indefinitely.
#[derive(Debug)]
pub struct Stage<C: Context2D> {
    ctx: C,
    opts: StageOpts,
    layout: GlyphLayout,
    palette: Palette,
    chain: GlyphChain,
    ticks: u64,
}

impl Stage<CpuContext> {
    /// Stage backed by a fresh `vello_cpu` surface sized from `opts`.
    pub fn cpu(opts: StageOpts) -> BoomerangResult<Self> {
        opts.validate()?;
        Self::new(CpuContext::new(opts.canvas)?, opts)
    }
}

impl<C: Context2D> Stage<C> {
    /// Wrap an existing surface. The surface must match the configured viewport.
    pub fn new(ctx: C, opts: StageOpts) -> BoomerangResult<Self> {
        opts.validate()?;
        if ctx.size() != opts.canvas {
            return Err(BoomerangError::surface(format!(
                "surface is {}x{} but stage expects {}x{}",
                ctx.size().width,
                ctx.size().height,
                opts.canvas.width,
                opts.canvas.height
            )));
        }
        let palette = Palette::standard()?;
        let layout = GlyphLayout::new(opts.canvas, palette.fore);
        Ok(Self {
            ctx,
            opts,
            layout,
            palette,
            chain: GlyphChain::new(),
            ticks: 0,
        })
    }

    /// Paint the background, draw every glyph and present the surface.
    pub fn render(&mut self) -> BoomerangResult<()> {
        let Canvas { width, height } = self.opts.canvas;
        self.ctx.set_fill_style(self.palette.back);
        self.ctx.fill_rect(0.0, 0.0, f64::from(width), f64::from(height));
        self.chain.draw(&mut self.ctx, &self.layout);
        self.ctx.present()
    }

    /// One chain update, then one redraw.
    pub fn tick(&mut self) -> BoomerangResult<ChainUpdate> {
        let out = self.chain.update();
        if let ChainUpdate::Completed(c) = out {
            if c.reversed {
                tracing::debug!(glyph = c.glyph, direction = ?c.direction, "sweep reversed");
            }
            self.chain.start_updating();
        }
        self.ticks += 1;
        self.render()?;
        Ok(out)
    }

    /// Start trigger: begins the glyph under the cursor if it is at rest.
    pub fn handle_tap(&mut self) -> bool {
        let started = self.chain.start_updating();
        if started {
            tracing::debug!(glyph = self.chain.cursor(), "glyph started");
        }
        started
    }

    /// The glyph chain.
    pub fn chain(&self) -> &GlyphChain {
        &self.chain
    }

    /// The drawing surface.
    pub fn context(&self) -> &C {
        &self.ctx
    }

    /// Ticks processed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Glyph geometry for this viewport.
    pub fn layout(&self) -> &GlyphLayout {
        &self.layout
    }

    /// Viewport size.
    pub fn canvas(&self) -> Canvas {
        self.opts.canvas
    }
}

#[cfg(test)]
#[path = "../tests/unit/stage.rs"]
mod tests;
