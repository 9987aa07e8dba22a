use log::info;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::adapters::pixel_format::rgba_to_rgb;
use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;

/// Writes each presented frame to a binary (P6) PPM file, replacing the
/// previous contents. Missing parent directories are created.
#[derive(Debug, Clone)]
pub struct PpmFilePresenter {
    filepath: PathBuf,
}

impl PpmFilePresenter {
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
        }
    }
}

impl FramePresenterPort for PpmFilePresenter {
    type Error = std::io::Error;

    fn present(&mut self, frame: &FrameBuffer) -> std::io::Result<()> {
        if let Some(parent) = self.filepath.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = BufWriter::new(File::create(&self.filepath)?);
        write_ppm(&mut file, frame)?;
        file.flush()?;

        info!("saved frame to {}", self.filepath.display());

        Ok(())
    }
}

/// P6 header (width, height, max colour 255) followed by packed RGB rows.
pub fn write_ppm<W: Write>(writer: &mut W, frame: &FrameBuffer) -> std::io::Result<()> {
    let width = frame.pixel_rect().width();
    let height = frame.pixel_rect().height();

    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;
    writer.write_all(&rgba_to_rgb(frame.buffer()))?;

    Ok(())
}
