pub const DEFAULT_MAX_ITERATIONS: i32 = 64;
pub const MIN_ITERATIONS: i32 = 1;
pub const COARSE_STEP: i32 = 32;
pub const FINE_STEP: i32 = 1;

/// Escape-time iteration limit handed to the shader each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationBudget {
    max_iterations: i32,
}

impl Default for IterationBudget {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl IterationBudget {
    /// Values below [`MIN_ITERATIONS`] are raised to it.
    #[must_use]
    pub fn new(max_iterations: i32) -> Self {
        Self {
            max_iterations: max_iterations.max(MIN_ITERATIONS),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> i32 {
        self.max_iterations
    }

    pub fn increase(&mut self, fine: bool) {
        self.max_iterations = self.max_iterations.saturating_add(step(fine));
    }

    pub fn decrease(&mut self, fine: bool) {
        self.max_iterations = self
            .max_iterations
            .saturating_sub(step(fine))
            .max(MIN_ITERATIONS);
    }
}

fn step(fine: bool) -> i32 {
    if fine { FINE_STEP } else { COARSE_STEP }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_is_sixty_four() {
        assert_eq!(IterationBudget::default().max_iterations(), 64);
    }

    #[test]
    fn new_clamps_to_minimum() {
        assert_eq!(IterationBudget::new(0).max_iterations(), 1);
        assert_eq!(IterationBudget::new(-20).max_iterations(), 1);
        assert_eq!(IterationBudget::new(500).max_iterations(), 500);
    }

    #[test]
    fn coarse_and_fine_increase() {
        let mut budget = IterationBudget::new(64);

        budget.increase(false);
        assert_eq!(budget.max_iterations(), 96);

        budget.increase(true);
        assert_eq!(budget.max_iterations(), 97);
    }

    #[test]
    fn coarse_and_fine_decrease() {
        let mut budget = IterationBudget::new(64);

        budget.decrease(false);
        assert_eq!(budget.max_iterations(), 32);

        budget.decrease(true);
        assert_eq!(budget.max_iterations(), 31);
    }

    #[test]
    fn decrease_never_goes_below_one() {
        let mut budget = IterationBudget::new(20);

        budget.decrease(false);
        assert_eq!(budget.max_iterations(), 1);

        budget.decrease(true);
        assert_eq!(budget.max_iterations(), 1);
    }

    #[test]
    fn increase_saturates_at_i32_max() {
        let mut budget = IterationBudget::new(i32::MAX - 5);

        budget.increase(false);

        assert_eq!(budget.max_iterations(), i32::MAX);
    }
}
