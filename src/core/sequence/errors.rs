use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TargetParseError {
    #[error("real component '{input}' is not a number")]
    InvalidReal { input: String },
    #[error("imaginary component '{input}' is not a number")]
    InvalidImaginary { input: String },
    #[error("target ({real}, {imag}) is not finite")]
    NonFinite { real: f64, imag: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("failed to write frame to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode frame {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("frame readback failed: {0}")]
    Readback(String),
    #[error("cannot capture an empty {width}x{height} viewport")]
    EmptyViewport { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_errors_name_the_bad_component() {
        let real = TargetParseError::InvalidReal {
            input: "abc".to_string(),
        };
        let imag = TargetParseError::InvalidImaginary {
            input: "".to_string(),
        };

        assert_eq!(real.to_string(), "real component 'abc' is not a number");
        assert_eq!(imag.to_string(), "imaginary component '' is not a number");
    }

    #[test]
    fn buffer_size_error_reports_dimensions() {
        let error = CaptureError::BufferSize {
            width: 2,
            height: 3,
            expected: 24,
            actual: 10,
        };

        assert_eq!(
            error.to_string(),
            "pixel buffer holds 10 bytes, expected 24 for 2x3"
        );
    }
}
