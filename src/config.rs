use crate::foundation::core::Canvas;
use crate::foundation::error::{BoomerangError, BoomerangResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Largest viewport area a stage will allocate a surface for.
pub const MAX_PIXELS: u64 = 1 << 26;

/// Options a stage is constructed from.
///
/// Only the viewport is configurable; animation tunables are compile-time constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StageOpts {
    /// Viewport size in pixels.
    pub canvas: Canvas,
}

impl Default for StageOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 800,
                height: 600,
            },
        }
    }
}

impl StageOpts {
    /// Options for a `width` x `height` viewport.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            canvas: Canvas { width, height },
        }
    }

    /// Parse options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BoomerangResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| BoomerangError::config(format!("parse stage options JSON: {e}")))
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BoomerangResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BoomerangError::config(format!("open stage options '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject viewports no surface can back.
    pub fn validate(&self) -> BoomerangResult<()> {
        let Canvas { width, height } = self.canvas;
        if width == 0 || height == 0 {
            return Err(BoomerangError::config(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(BoomerangError::config(format!(
                "canvas {width}x{height} exceeds {max}x{max}",
                max = u16::MAX
            )));
        }
        let pixels = u64::from(width) * u64::from(height);
        if pixels > MAX_PIXELS {
            return Err(BoomerangError::config(format!(
                "canvas {width}x{height} has {pixels} pixels, more than {MAX_PIXELS}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
