use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::core::sequence::CaptureError;

/// Writes a tightly packed RGBA8 buffer as a PNG, creating parent directories.
pub fn write_png(
    rgba: Vec<u8>,
    width: u32,
    height: u32,
    filepath: impl AsRef<Path>,
) -> Result<(), CaptureError> {
    let filepath = filepath.as_ref();
    let expected = width as usize * height as usize * 4;
    let actual = rgba.len();

    if expected == 0 {
        return Err(CaptureError::EmptyViewport { width, height });
    }

    let image = RgbaImage::from_raw(width, height, rgba).ok_or(CaptureError::BufferSize {
        width,
        height,
        expected,
        actual,
    })?;

    if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CaptureError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    image
        .save_with_format(filepath, ImageFormat::Png)
        .map_err(|source| CaptureError::Encode {
            path: filepath.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_png_and_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("render").join("0.png");
        let rgba = vec![
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255, //
            10, 20, 30, 255,
        ];

        write_png(rgba, 2, 2, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.get_pixel(1, 0).0, [0, 255, 0, 255]);
        assert_eq!(decoded.get_pixel(1, 1).0, [10, 20, 30, 255]);
    }

    #[test]
    fn rejects_short_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.png");

        let result = write_png(vec![0; 7], 2, 1, &path);

        assert!(matches!(
            result,
            Err(CaptureError::BufferSize {
                expected: 8,
                actual: 7,
                ..
            })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn rejects_empty_frame() {
        let dir = tempfile::tempdir().unwrap();

        let result = write_png(Vec::new(), 0, 10, dir.path().join("empty.png"));

        assert!(matches!(result, Err(CaptureError::EmptyViewport { .. })));
    }

    #[test]
    fn reports_io_failure_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = write_png(vec![0; 4], 1, 1, blocker.join("0.png"));

        assert!(matches!(result, Err(CaptureError::Io { .. })));
    }
}
