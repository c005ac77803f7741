//! Frame output.
//!
//! Exposes:
//! - `ImageSink`: where finished frames go
//! - `FileSink`: one image file per frame (binary PPM or PNG)
//! - `MemorySink`: keeps frames in memory
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{RenderError, Result};
use crate::render::framebuffer::Framebuffer;

pub trait ImageSink {
    /// Persists frame `index` (zero-based, sequential).
    fn emit(&mut self, index: usize, frame: &Framebuffer) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// Binary P6 pixmap
    #[default]
    Ppm,
    Png,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Ppm => "ppm",
            ImageFormat::Png => "png",
        }
    }
}

/// Interleaved RGB bytes, row-major; alpha is dropped.
pub fn encode_rgb(frame: &Framebuffer) -> Vec<u8> {
    frame.pixels().iter().flat_map(|c| c.to_rgb()).collect()
}

/// Writes `<dir>/<prefix><index>.<ext>`.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    prefix: String,
    format: ImageFormat,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, format: ImageFormat) -> Self {
        Self { dir: dir.into(), prefix: prefix.into(), format }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn create_dir_all(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|source| RenderError::Io {
            path: self.dir.clone(),
            source,
        })
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir
            .join(format!("{}{}.{}", self.prefix, index, self.format.extension()))
    }
}

impl ImageSink for FileSink {
    fn emit(&mut self, index: usize, frame: &Framebuffer) -> Result<()> {
        let path = self.path_for(index);
        let file = File::create(&path).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?;
        let mut out = BufWriter::new(file);
        let (w, h) = (frame.width() as u32, frame.height() as u32);
        let rgb = encode_rgb(frame);
        let written = match self.format {
            ImageFormat::Ppm => PnmEncoder::new(&mut out)
                .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
                .write_image(&rgb, w, h, ExtendedColorType::Rgb8),
            ImageFormat::Png => PngEncoder::new(&mut out).write_image(&rgb, w, h, ExtendedColorType::Rgb8),
        };
        written.map_err(|source| RenderError::Encode { path: path.clone(), source })?;
        // drop would swallow a failed final write
        out.flush().map_err(|source| RenderError::Io { path, source })
    }
}

#[derive(Debug, Default)]
pub struct MemorySink {
    pub frames: Vec<(usize, Framebuffer)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageSink for MemorySink {
    fn emit(&mut self, index: usize, frame: &Framebuffer) -> Result<()> {
        self.frames.push((index, frame.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::color::Color;
    use tempfile::TempDir;

    fn sample_frame() -> Framebuffer {
        let mut fb = Framebuffer::new(4, 3, Color::LIGHT_GRAY);
        fb.set_pixel(0, 1, Color::new(10, 20, 30, 0));
        fb
    }

    #[test]
    fn encode_rgb_is_row_major_without_alpha() {
        let bytes = encode_rgb(&sample_frame());
        assert_eq!(bytes.len(), 4 * 3 * 3);
        assert_eq!(&bytes[0..6], &[211, 211, 211, 10, 20, 30]);
    }

    #[test]
    fn file_sink_writes_binary_ppm() {
        let dir = TempDir::new().unwrap();
        let mut sink = FileSink::new(dir.path(), "map", ImageFormat::Ppm);
        sink.emit(0, &sample_frame()).unwrap();

        let path = dir.path().join("map0.ppm");
        let bytes = std::fs::read(&path).unwrap();
        let data = encode_rgb(&sample_frame());
        assert!(bytes.ends_with(&data));
        let header = std::str::from_utf8(&bytes[..bytes.len() - data.len()]).unwrap();
        assert_eq!(header.split_whitespace().collect::<Vec<_>>(), ["P6", "4", "3", "255"]);
        assert!(header.ends_with(char::is_whitespace));
    }

    #[test]
    fn file_sink_writes_png() {
        let dir = TempDir::new().unwrap();
        let mut sink = FileSink::new(dir.path(), "frame", ImageFormat::Png);
        sink.emit(3, &sample_frame()).unwrap();
        let img = image::open(dir.path().join("frame3.png")).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.get_pixel(1, 0).0, [10, 20, 30]);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let mut sink = FileSink::new(dir.path().join("absent"), "map", ImageFormat::Ppm);
        let err = sink.emit(0, &sample_frame()).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
        sink.create_dir_all().unwrap();
        sink.emit(0, &sample_frame()).unwrap();
        assert!(sink.path_for(0).exists());
    }

    #[cfg(unix)]
    #[test]
    fn failed_final_write_is_reported() {
        if !Path::new("/dev/full").exists() {
            return;
        }
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink("/dev/full", dir.path().join("map0.ppm")).unwrap();
        let mut sink = FileSink::new(dir.path(), "map", ImageFormat::Ppm);
        // the whole 4x3 frame fits in the write buffer
        let err = sink.emit(0, &sample_frame()).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. } | RenderError::Encode { .. }), "{err}");
    }
}
