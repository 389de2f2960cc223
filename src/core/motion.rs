/// Bounded back-and-forth accumulator.
///
/// The offset moves by `step` every tick. Once it reaches `upper` it is
/// pinned there and the step turns negative, once it reaches `lower` it is
/// pinned there and the step turns positive again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    offset: f32,
    step: f32,
    lower: f32,
    upper: f32,
}

impl Oscillator {
    /// Creates an oscillator starting at `start` (clamped into the bounds) and
    /// initially moving towards `upper`.
    pub fn new(start: f32, step: f32, lower: f32, upper: f32) -> Self {
        Self {
            offset: start.clamp(lower, upper),
            step: step.abs(),
            lower,
            upper,
        }
    }

    /// Current accumulated offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Step that the next tick will apply.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Advances one tick and returns the step that was applied.
    pub fn advance(&mut self) -> f32 {
        let applied = self.step;

        self.offset += self.step;

        if self.offset >= self.upper {
            self.offset = self.upper;
            self.step = -self.step.abs();
        } else if self.offset <= self.lower {
            self.offset = self.lower;
            self.step = self.step.abs();
        }

        applied
    }
}

/// How a drawable moves every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Rotation about the drawable's axis only.
    Spin,
    /// Rotation, then a translation along the local Y axis by the
    /// oscillator's step.
    ///
    /// The translation is relative to the already rotated model matrix and
    /// accumulates every tick, so the object drifts along a path that follows
    /// its rotation rather than bouncing between two fixed heights.
    SpinAndBob(Oscillator),
}
