//! Stateless drawing of boomerang half-circle glyphs.

use std::f64::consts::PI;

use crate::foundation::core::{Canvas, Rgba8Premul};
use crate::foundation::math::{divide_scale, sinify};
use crate::render::context::{Context2D, LineCap};
use crate::tunables::{GLYPH_COUNT, SIZE_FACTOR, STROKE_FACTOR};

/// Arcs per glyph.
pub const SUB_ARCS: usize = 2;

/// Geometry derived once from the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphLayout {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
    /// Vertical distance between glyph centers.
    pub gap: f64,
    /// Arc radius.
    pub size: f64,
    /// Stroke width.
    pub stroke_width: f64,
    /// Stroke color.
    pub fore: Rgba8Premul,
}

impl GlyphLayout {
    /// Lay out [`GLYPH_COUNT`] rows on `canvas`.
    pub fn new(canvas: Canvas, fore: Rgba8Premul) -> Self {
        let (w, h) = (canvas.w(), canvas.h());
        let gap = h / (GLYPH_COUNT as f64 + 1.0);
        Self {
            width: w,
            height: h,
            gap,
            size: gap / SIZE_FACTOR,
            stroke_width: w.min(h) / STROKE_FACTOR,
            fore,
        }
    }

    /// Center of glyph `i`.
    pub fn center(&self, i: usize) -> (f64, f64) {
        (self.width / 2.0, self.gap * (i as f64 + 1.0))
    }
}

/// Translation and rotation applied to one sub-arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubArcPose {
    /// Horizontal offset from the glyph center.
    pub offset_x: f64,
    /// Rotation in radians.
    pub rotation: f64,
    /// First sampled angle, in degrees.
    pub start_deg: i32,
    /// Last sampled angle, in degrees.
    pub end_deg: i32,
}

/// Pose of sub-arc `j` at glyph progress `scale`.
///
/// Sub-arc `j` owns the `j`-th half of the glyph's progress; within it the envelope rises and
/// falls once, pushing the arc out by up to `width / 2` (right for `j = 0`, left for `j = 1`)
/// while spinning it through up to half a turn.
pub fn sub_arc_pose(j: usize, scale: f64, width: f64) -> SubArcPose {
    let sc = divide_scale(scale, j, SUB_ARCS);
    let sf = sinify(sc);
    let side = 1.0 - 2.0 * j as f64;
    let start_deg = -90 + 180 * j as i32;
    SubArcPose {
        offset_x: (width / 2.0) * side * sf,
        rotation: PI * sf,
        start_deg,
        end_deg: start_deg + 180,
    }
}

/// Stroke a polyline arc of radius `r` sampled every degree from `start` to `end` inclusive.
pub fn draw_arc(ctx: &mut dyn Context2D, start: i32, end: i32, r: f64) {
    ctx.begin_path();
    for deg in start..=end {
        let a = f64::from(deg).to_radians();
        let (x, y) = (r * a.cos(), r * a.sin());
        if deg == start {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();
}

fn draw_sub_arc(ctx: &mut dyn Context2D, j: usize, scale: f64, size: f64, width: f64) {
    let pose = sub_arc_pose(j, scale, width);
    ctx.save();
    ctx.translate(pose.offset_x, 0.0);
    ctx.rotate(pose.rotation);
    draw_arc(ctx, pose.start_deg, pose.end_deg, size);
    ctx.restore();
}

/// Draw glyph `i` at progress `scale`. Leaves the transform as it found it.
pub fn draw_glyph(ctx: &mut dyn Context2D, layout: &GlyphLayout, i: usize, scale: f64) {
    ctx.set_stroke_style(layout.fore);
    ctx.set_line_width(layout.stroke_width);
    ctx.set_line_cap(LineCap::Round);
    let (cx, cy) = layout.center(i);
    ctx.save();
    ctx.translate(cx, cy);
    for j in 0..SUB_ARCS {
        draw_sub_arc(ctx, j, scale, layout.size, layout.width);
    }
    ctx.restore();
}

#[cfg(test)]
#[path = "../../tests/unit/render/glyph.rs"]
mod tests;
