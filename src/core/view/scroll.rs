/// Offset substituted for a single discrete wheel notch.
pub const WHEEL_TICK_OFFSET: f64 = 0.3;

/// Normalizes a vertical scroll offset into a zoom-factor offset.
///
/// Mouse wheels report whole notches of exactly `1` or `-1`; trackpads report
/// small fractional offsets that are used as-is. A notch up zooms in.
#[must_use]
pub fn normalize_scroll_offset(y_offset: f64) -> f64 {
    if y_offset == 1.0 {
        -WHEEL_TICK_OFFSET
    } else if y_offset == -1.0 {
        WHEEL_TICK_OFFSET
    } else {
        y_offset
    }
}

/// Zoom factor for a scroll offset. May be non-positive for large continuous
/// offsets, in which case the zoom is rejected downstream.
#[must_use]
pub fn scroll_zoom_factor(y_offset: f64) -> f64 {
    1.0 + normalize_scroll_offset(y_offset)
}
