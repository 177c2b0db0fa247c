use crate::core::data::{Complex, ScreenPoint, Viewport};

pub const DEFAULT_SCALE: f64 = 1.0;

/// Center and half-width of the visible window in fractal space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub center: Complex,
    pub scale: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: Complex::ORIGIN,
            scale: DEFAULT_SCALE,
        }
    }
}

/// Owns the [`ViewState`] and every operation that moves it.
///
/// The screen mapping is `fractal = center + normalized * scale`, where
/// `normalized` spans `[-1, 1]` on both axes with Y flipped so that moving
/// down the screen decreases the imaginary part. No aspect correction is
/// applied; the fragment shader uses the same formula.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ViewTransform {
    state: ViewState,
}

impl ViewTransform {
    #[must_use]
    pub fn new(state: ViewState) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.state.center
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Maps a screen pixel to fractal space, or `None` for an empty viewport.
    #[must_use]
    pub fn screen_to_fractal(&self, point: ScreenPoint, viewport: Viewport) -> Option<Complex> {
        if viewport.is_empty() {
            return None;
        }

        let ViewState { center, scale } = self.state;
        let width = viewport.width_f64();
        let height = viewport.height_f64();

        Some(Complex {
            real: point.x / width * 2.0 * scale + (center.real - scale),
            imag: (height - point.y) / height * 2.0 * scale + (center.imag - scale),
        })
    }

    /// Inverse of [`Self::screen_to_fractal`].
    #[must_use]
    pub fn fractal_to_screen(&self, point: Complex, viewport: Viewport) -> Option<ScreenPoint> {
        if viewport.is_empty() {
            return None;
        }

        let ViewState { center, scale } = self.state;
        let width = viewport.width_f64();
        let height = viewport.height_f64();

        Some(ScreenPoint {
            x: (point.real - (center.real - scale)) / (2.0 * scale) * width,
            y: height - (point.imag - (center.imag - scale)) / (2.0 * scale) * height,
        })
    }

    /// Drags the view by a pointer delta given in screen pixels.
    pub fn pan(&mut self, dx: f64, dy: f64, viewport: Viewport) {
        if viewport.is_empty() {
            return;
        }

        let scale = self.state.scale;
        self.state.center.real -= dx / viewport.width_f64() * scale * 2.0;
        self.state.center.imag += dy / viewport.height_f64() * scale * 2.0;
    }

    /// Rescales by `factor` while keeping `target` under the same screen pixel.
    ///
    /// A factor that is not strictly positive (including NaN) leaves the view untouched.
    pub fn zoom_towards(&mut self, target: Complex, factor: f64) {
        if !(factor > 0.0) {
            return;
        }

        let prev_scale = self.state.scale;
        let scale = prev_scale * factor;
        let ratio = scale / prev_scale;
        let center = self.state.center;

        self.state.scale = scale;
        self.state.center = Complex {
            real: scale + target.real - ratio * (target.real - center.real + prev_scale),
            imag: scale + target.imag - ratio * (target.imag - center.imag + prev_scale),
        };
    }

    /// Jumps to `center` at the default scale.
    pub fn reset_to(&mut self, center: Complex) {
        self.state = ViewState {
            center,
            scale: DEFAULT_SCALE,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELATIVE_TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        let bound = RELATIVE_TOLERANCE * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= bound,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn transform(real: f64, imag: f64, scale: f64) -> ViewTransform {
        ViewTransform::new(ViewState {
            center: Complex::new(real, imag),
            scale,
        })
    }

    #[test]
    fn default_view_is_unit_scale_at_origin() {
        let view = ViewTransform::default();

        assert_eq!(view.center(), Complex::ORIGIN);
        assert_eq!(view.scale(), 1.0);
    }

    #[test]
    fn screen_corners_map_to_window_edges() {
        let view = transform(0.0, 0.0, 1.0);
        let viewport = Viewport::new(640, 480);

        let top_left = view.screen_to_fractal(ScreenPoint::new(0.0, 0.0), viewport).unwrap();
        let bottom_right = view
            .screen_to_fractal(ScreenPoint::new(640.0, 480.0), viewport)
            .unwrap();
        let middle = view
            .screen_to_fractal(ScreenPoint::new(320.0, 240.0), viewport)
            .unwrap();

        assert_eq!(top_left, Complex::new(-1.0, 1.0));
        assert_eq!(bottom_right, Complex::new(1.0, -1.0));
        assert_eq!(middle, Complex::new(0.0, 0.0));
    }

    #[test]
    fn screen_to_fractal_follows_center_and_scale() {
        let view = transform(-0.5, 0.25, 0.5);
        let viewport = Viewport::new(200, 100);

        let point = view
            .screen_to_fractal(ScreenPoint::new(50.0, 25.0), viewport)
            .unwrap();

        // real: 0.25 * 1.0 + (-1.0) ; imag: 0.75 * 1.0 + (-0.25)
        assert_eq!(point, Complex::new(-0.75, 0.5));
    }

    #[test]
    fn empty_viewport_has_no_mapping() {
        let view = ViewTransform::default();

        assert_eq!(
            view.screen_to_fractal(ScreenPoint::new(1.0, 1.0), Viewport::new(0, 10)),
            None
        );
        assert_eq!(
            view.fractal_to_screen(Complex::ORIGIN, Viewport::new(10, 0)),
            None
        );
    }

    #[test]
    fn round_trip_recovers_screen_pixel() {
        let views = [
            transform(0.0, 0.0, 1.0),
            transform(-0.743643887, 0.131825904, 3.2e-7),
            transform(12.5, -7.25, 40.0),
        ];
        let viewports = [Viewport::new(1, 1), Viewport::new(640, 480), Viewport::new(33, 1024)];
        let points = [
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(0.5, 0.5),
            ScreenPoint::new(17.0, 3.0),
            ScreenPoint::new(639.0, 479.0),
        ];

        for view in views {
            for viewport in viewports {
                for point in points {
                    let fractal = view.screen_to_fractal(point, viewport).unwrap();
                    let back = view.fractal_to_screen(fractal, viewport).unwrap();

                    assert!((back.x - point.x).abs() < 1e-6, "x: {} vs {}", back.x, point.x);
                    assert!((back.y - point.y).abs() < 1e-6, "y: {} vs {}", back.y, point.y);
                }
            }
        }
    }

    #[test]
    fn pan_moves_center_against_drag_direction() {
        let mut view = transform(0.0, 0.0, 0.5);
        let viewport = Viewport::new(400, 200);

        view.pan(100.0, 50.0, viewport);

        assert_eq!(view.center().real, -(100.0 / 400.0) * 0.5 * 2.0);
        assert_eq!(view.center().imag, (50.0 / 200.0) * 0.5 * 2.0);
        assert_eq!(view.scale(), 0.5);
    }

    #[test]
    fn sequential_pans_compose_additively() {
        let viewport = Viewport::new(256, 128);
        let mut stepwise = transform(1.0, -1.0, 2.0);
        let mut combined = stepwise;

        stepwise.pan(16.0, -8.0, viewport);
        stepwise.pan(48.0, 40.0, viewport);
        combined.pan(64.0, 32.0, viewport);

        assert_close(stepwise.center().real, combined.center().real);
        assert_close(stepwise.center().imag, combined.center().imag);
    }

    #[test]
    fn pan_on_empty_viewport_is_noop() {
        let mut view = transform(0.3, 0.2, 1.0);
        let before = view;

        view.pan(10.0, 10.0, Viewport::new(0, 0));

        assert_eq!(view, before);
    }

    #[test]
    fn zoom_keeps_target_under_the_same_pixel() {
        let viewport = Viewport::new(640, 480);
        let cases = [
            (transform(0.0, 0.0, 1.0), ScreenPoint::new(100.0, 400.0), 0.7),
            (transform(-0.5, 0.1, 0.01), ScreenPoint::new(639.0, 0.0), 1.3),
            (transform(0.25, -0.6, 3.0), ScreenPoint::new(320.0, 240.0), 0.99),
            (transform(-1.75, 0.0, 1e-5), ScreenPoint::new(12.5, 470.25), 0.5),
        ];

        for (mut view, pixel, factor) in cases {
            let target = view.screen_to_fractal(pixel, viewport).unwrap();

            view.zoom_towards(target, factor);

            let after = view.screen_to_fractal(pixel, viewport).unwrap();
            assert_close(after.real, target.real);
            assert_close(after.imag, target.imag);
        }
    }

    #[test]
    fn zoom_multiplies_scale_by_factor() {
        let mut view = transform(0.1, 0.2, 0.8);

        view.zoom_towards(Complex::new(0.3, -0.4), 0.5);

        assert_eq!(view.scale(), 0.4);
    }

    #[test]
    fn zoom_at_center_keeps_center() {
        let mut view = transform(0.3, 0.2, 1.0);

        view.zoom_towards(Complex::new(0.3, 0.2), 0.99);

        assert_close(view.center().real, 0.3);
        assert_close(view.center().imag, 0.2);
    }

    #[test]
    fn non_positive_factor_leaves_view_unchanged() {
        let mut view = transform(-0.4, 0.6, 0.25);
        let before = view;

        for factor in [0.0, -0.0, -0.3, -5.0, f64::NAN, f64::NEG_INFINITY] {
            view.zoom_towards(Complex::new(1.0, 1.0), factor);
            assert_eq!(view, before);
        }
    }

    #[test]
    fn reset_to_restores_default_scale() {
        let mut view = transform(5.0, 5.0, 1e-9);

        view.reset_to(Complex::new(0.3, 0.2));

        assert_eq!(view.center(), Complex::new(0.3, 0.2));
        assert_eq!(view.scale(), DEFAULT_SCALE);
    }
}
