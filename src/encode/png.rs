use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::TickIndex;
use crate::foundation::error::{BoomerangError, BoomerangResult};
use crate::render::backend::FrameRGBA;
use std::path::{Path, PathBuf};

/// Writes each frame as `frame_NNNNN.png` into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    cfg: Option<SinkConfig>,
    last_idx: Option<TickIndex>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Sink writing into `dir` (created on `begin`).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cfg: None,
            last_idx: None,
            written: Vec::new(),
        }
    }

    /// Path a frame at `idx` is written to.
    pub fn frame_path(&self, idx: TickIndex) -> PathBuf {
        self.dir.join(format!("frame_{:05}.png", idx.0))
    }

    /// Files written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

/// Write one frame as a PNG file.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> BoomerangResult<()> {
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| BoomerangError::encode(format!("write png '{}': {e}", path.display())))
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> BoomerangResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            BoomerangError::encode(format!(
                "create output dir '{}': {e}",
                self.dir.display()
            ))
        })?;
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: TickIndex, frame: &FrameRGBA) -> BoomerangResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| BoomerangError::encode("png sink not started"))?;
        if let Some(last) = self.last_idx
            && idx <= last
        {
            return Err(BoomerangError::encode(format!(
                "frames must arrive in increasing tick order (got {} after {})",
                idx.0, last.0
            )));
        }
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(BoomerangError::encode(format!(
                "frame is {}x{} but sink expects {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let path = self.frame_path(idx);
        write_png(&path, frame)?;
        self.written.push(path);
        self.last_idx = Some(idx);
        Ok(())
    }

    fn end(&mut self) -> BoomerangResult<()> {
        tracing::info!(
            frames = self.written.len(),
            dir = %self.dir.display(),
            "png sequence written"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
