//! Bounded length stepper behind the -/+ buttons.

/// Smallest length the stepper allows
pub const MIN_LENGTH: usize = 5;
/// Largest length the stepper allows
pub const MAX_LENGTH: usize = 20;

/// Result of a single -/+ press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Changed(usize),
    /// Already at `MIN_LENGTH`; value unchanged.
    AtMinimum,
    /// Already at `MAX_LENGTH`; value unchanged.
    AtMaximum,
}

impl StepOutcome {
    /// Warning to show the user, if the press hit a bound.
    pub fn warning(self) -> Option<String> {
        match self {
            StepOutcome::Changed(_) => None,
            StepOutcome::AtMinimum => Some(format!("Whoops! No going below {}...", MIN_LENGTH)),
            StepOutcome::AtMaximum => Some(format!("Whoops! No going above {}...", MAX_LENGTH)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthStepper {
    value: usize,
}

impl LengthStepper {
    pub fn new(initial: usize) -> Self {
        Self {
            value: initial.clamp(MIN_LENGTH, MAX_LENGTH),
        }
    }

    pub fn value(&self) -> usize {
        self.value
    }

    /// Validate and clamp to the allowed range
    pub fn set(&mut self, value: usize) {
        self.value = value.clamp(MIN_LENGTH, MAX_LENGTH);
    }

    pub fn increment(&mut self) -> StepOutcome {
        if self.value >= MAX_LENGTH {
            return StepOutcome::AtMaximum;
        }
        self.value += 1;
        StepOutcome::Changed(self.value)
    }

    pub fn decrement(&mut self) -> StepOutcome {
        if self.value <= MIN_LENGTH {
            return StepOutcome::AtMinimum;
        }
        self.value -= 1;
        StepOutcome::Changed(self.value)
    }
}

impl Default for LengthStepper {
    fn default() -> Self {
        Self::new(12)
    }
}
