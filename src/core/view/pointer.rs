use crate::core::data::ScreenPoint;

/// Previous pointer sample, used to turn absolute moves into drag deltas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    last: ScreenPoint,
    primary_down: bool,
    has_prior_sample: bool,
}

impl PointerState {
    /// Records a new sample and returns the delta from the previous one.
    ///
    /// The first sample after construction or [`Self::invalidate`] only seeds
    /// the position and yields `None`.
    pub fn observe(&mut self, position: ScreenPoint) -> Option<(f64, f64)> {
        let delta = self
            .has_prior_sample
            .then(|| (position.x - self.last.x, position.y - self.last.y));

        self.last = position;
        self.has_prior_sample = true;
        delta
    }

    /// Like [`Self::observe`], but only reports a delta while the primary button is held.
    pub fn drag(&mut self, position: ScreenPoint) -> Option<(f64, f64)> {
        let delta = self.observe(position);
        delta.filter(|_| self.primary_down)
    }

    pub fn set_primary_down(&mut self, down: bool) {
        self.primary_down = down;
    }

    #[must_use]
    pub fn is_primary_down(&self) -> bool {
        self.primary_down
    }

    #[must_use]
    pub fn has_prior_sample(&self) -> bool {
        self.has_prior_sample
    }

    #[must_use]
    pub fn last_position(&self) -> Option<ScreenPoint> {
        self.has_prior_sample.then_some(self.last)
    }

    /// Forgets the previous sample; button state is kept.
    pub fn invalidate(&mut self) {
        self.has_prior_sample = false;
    }
}

#[cfg(test)]
mod tests {
    use super::PointerState;
    use crate::core::data::ScreenPoint;

    #[test]
    fn first_sample_only_seeds_position() {
        let mut pointer = PointerState::default();

        assert_eq!(pointer.observe(ScreenPoint::new(10.0, 20.0)), None);
        assert!(pointer.has_prior_sample());
        assert_eq!(pointer.last_position(), Some(ScreenPoint::new(10.0, 20.0)));
    }

    #[test]
    fn subsequent_samples_yield_deltas() {
        let mut pointer = PointerState::default();

        pointer.observe(ScreenPoint::new(10.0, 20.0));
        let delta = pointer.observe(ScreenPoint::new(15.0, 12.0));

        assert_eq!(delta, Some((5.0, -8.0)));
    }

    #[test]
    fn drag_requires_primary_button() {
        let mut pointer = PointerState::default();

        pointer.drag(ScreenPoint::new(0.0, 0.0));
        assert_eq!(pointer.drag(ScreenPoint::new(4.0, 4.0)), None);

        pointer.set_primary_down(true);
        assert_eq!(pointer.drag(ScreenPoint::new(6.0, 1.0)), Some((2.0, -3.0)));

        pointer.set_primary_down(false);
        assert_eq!(pointer.drag(ScreenPoint::new(9.0, 9.0)), None);
    }

    #[test]
    fn moves_without_button_still_track_position() {
        let mut pointer = PointerState::default();

        pointer.drag(ScreenPoint::new(0.0, 0.0));
        pointer.drag(ScreenPoint::new(50.0, 50.0));
        pointer.set_primary_down(true);

        assert_eq!(pointer.drag(ScreenPoint::new(51.0, 50.0)), Some((1.0, 0.0)));
    }

    #[test]
    fn invalidate_drops_prior_sample_but_keeps_button() {
        let mut pointer = PointerState::default();
        pointer.set_primary_down(true);
        pointer.observe(ScreenPoint::new(1.0, 1.0));

        pointer.invalidate();

        assert!(!pointer.has_prior_sample());
        assert!(pointer.is_primary_down());
        assert_eq!(pointer.drag(ScreenPoint::new(100.0, 100.0)), None);
        assert_eq!(pointer.drag(ScreenPoint::new(101.0, 100.0)), Some((1.0, 0.0)));
    }
}
