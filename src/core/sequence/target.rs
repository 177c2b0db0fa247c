use crate::core::data::Complex;
use crate::core::sequence::errors::TargetParseError;

/// Where a rendered zoom should dive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomTarget {
    /// Whatever fractal point is under the cursor when the sequence starts.
    Cursor,
    Point(Complex),
}

impl ZoomTarget {
    /// Interprets a coordinate typed by the operator.
    ///
    /// A literal `(0, 0)` means "use the cursor"; there is no way to target the
    /// true origin from the prompt.
    #[must_use]
    pub fn from_entered(point: Complex) -> Self {
        if point.is_origin() {
            Self::Cursor
        } else {
            Self::Point(point)
        }
    }

    /// Parses the two prompt fields. Empty fields count as zero.
    pub fn parse(real: &str, imag: &str) -> Result<Self, TargetParseError> {
        let real = parse_component(real)
            .ok_or_else(|| TargetParseError::InvalidReal {
                input: real.trim().to_string(),
            })?;
        let imag = parse_component(imag)
            .ok_or_else(|| TargetParseError::InvalidImaginary {
                input: imag.trim().to_string(),
            })?;

        let point = Complex::new(real, imag);
        if !point.is_finite() {
            return Err(TargetParseError::NonFinite { real, imag });
        }

        Ok(Self::from_entered(point))
    }

    /// Resolves to a concrete point; `fallback` is used when the cursor has no
    /// fractal position (empty viewport).
    #[must_use]
    pub fn resolve(self, cursor: Option<Complex>, fallback: Complex) -> Complex {
        match self {
            Self::Point(point) => point,
            Self::Cursor => cursor.unwrap_or(fallback),
        }
    }
}

fn parse_component(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    text.parse::<f64>().ok()
}
