//! Immutable solver traces.

use std::slice;

use sudokifu_core::Position;

use crate::{InvalidStep, Step};

/// An ordered, immutable sequence of solver steps.
///
/// Received whole from the service and never modified for the lifetime of a
/// replay session; the replay cursor indexes into it.
///
/// # Examples
///
/// ```
/// use sudokifu_core::Position;
/// use sudokifu_replay::StepSequence;
///
/// let trace = StepSequence::from_wire([(0, 0, 5), (1, 1, 3)]).unwrap();
/// assert_eq!(trace.len(), 2);
/// assert_eq!(trace.get(1).unwrap().pos, Position::new(1, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    /// Wraps already-typed steps.
    #[must_use]
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Validates a whole wire trace of `(row, col, value)` triples.
    ///
    /// Rejection is atomic: one bad triple and no sequence is produced. A
    /// partially applied trace would leave the board in a state the solver
    /// never described.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidStep`] encountered.
    pub fn from_wire<I>(triples: I) -> Result<Self, InvalidStep>
    where
        I: IntoIterator<Item = (u8, u8, u8)>,
    {
        let steps = triples
            .into_iter()
            .map(|(row, col, value)| Step::from_wire(row, col, value))
            .collect::<Result<_, _>>()?;
        Ok(Self { steps })
    }

    /// Number of steps in the trace.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the trace has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the step at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Step> {
        self.steps.get(index).copied()
    }

    /// Iterates the steps in trace order.
    pub fn iter(&self) -> slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Finds the most recent step strictly before `cursor` touching `pos`,
    /// scanning backward.
    ///
    /// This is the undo rule for backtracking traces: a cell's pre-step
    /// contents are whatever its *immediately preceding* touch left there,
    /// never an earlier or later one.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` exceeds the trace length.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokifu_core::Position;
    /// use sudokifu_replay::StepSequence;
    ///
    /// let trace = StepSequence::from_wire([(0, 0, 5), (1, 1, 3), (0, 0, 0)]).unwrap();
    /// let pos = Position::new(0, 0);
    ///
    /// // Looking back from the clear at index 2 finds the 5 at index 0
    /// let prior = trace.last_touch_before(2, pos).unwrap();
    /// assert_eq!(prior.entry.unwrap().value(), 5);
    ///
    /// // Nothing touches (0,0) before index 0
    /// assert_eq!(trace.last_touch_before(0, pos), None);
    /// ```
    #[must_use]
    pub fn last_touch_before(&self, cursor: usize, pos: Position) -> Option<Step> {
        self.steps[..cursor]
            .iter()
            .rev()
            .find(|step| step.pos == pos)
            .copied()
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
