/// Size of the rendering surface in physical pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// A minimised window reports a zero dimension; nothing can be mapped onto it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn width_f64(&self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_f64(&self) -> f64 {
        f64::from(self.height)
    }

    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// A position in screen space: origin top-left, Y increasing downward.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_dimensions() {
        let viewport = Viewport::new(640, 480);

        assert_eq!(viewport.width(), 640);
        assert_eq!(viewport.height(), 480);
        assert_eq!(viewport.width_f64(), 640.0);
        assert_eq!(viewport.height_f64(), 480.0);
        assert_eq!(viewport.pixel_count(), 307_200);
    }

    #[test]
    fn test_viewport_is_empty_with_any_zero_dimension() {
        assert!(Viewport::new(0, 480).is_empty());
        assert!(Viewport::new(640, 0).is_empty());
        assert!(Viewport::new(0, 0).is_empty());
        assert!(Viewport::default().is_empty());
        assert!(!Viewport::new(1, 1).is_empty());
    }
}
