//! One-comparison-per-call bubble sort state machine.
//!
//! The sorter owns the algorithm's cursor and pass bookkeeping but not the
//! data: every [`BubbleSorter::step`] call compares one adjacent pair in a
//! [`BarArray`] passed in by the caller, swaps it if out of order, and
//! advances. A pass over an array of length `n` therefore takes `n - 1`
//! steps; when a full pass makes no swaps, the sorter marks itself
//! completed and further steps are no-ops.

use crate::{bars::BarArray, types::BarIndex};

/// Result of a single sorting step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// One adjacent pair was compared; `swapped` tells whether it was
    /// exchanged.
    Compared { swapped: bool },
    /// The array is already sorted (or too short to sort); nothing was
    /// compared.
    Done,
}

/// Incremental bubble sort over a [`BarArray`].
///
/// ### Fields
/// - `cursor` - Left index of the next comparison, in `[0, len - 1)`.
/// - `swaps_in_pass` - Swaps made during the current pass; zero at a pass
///   boundary means the array is sorted.
/// - `completed` - Set once a full pass makes no swaps; never cleared
///   except by [`BubbleSorter::reset`].
/// - `comparisons`, `swaps`, `passes` - Lifetime counters for display.
#[derive(Debug, Default)]
pub struct BubbleSorter {
    cursor: BarIndex,
    swaps_in_pass: u32,
    completed: bool,

    pub comparisons: u64,
    pub swaps: u64,
    pub passes: u64,
}

impl BubbleSorter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the initial state: cursor at 0, all counters cleared,
    /// not completed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` once a full pass has made zero swaps.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The two indices involved in the upcoming comparison, or `None`
    /// once the sort has completed.
    pub fn highlight_pair(&self) -> Option<(BarIndex, BarIndex)> {
        if self.completed {
            None
        } else {
            Some((self.cursor, self.cursor + 1))
        }
    }

    /// Performs one bubble sort comparison on `bars`.
    ///
    /// Compares the pair at `cursor` and `cursor + 1`, swaps it if out of
    /// order, and advances the cursor. When the cursor reaches the end of
    /// a pass it wraps to 0; if that pass made no swaps, the sorter is
    /// marked completed instead.
    ///
    /// Arrays shorter than two elements are trivially sorted, so the
    /// first step on them returns [`StepOutcome::Done`] immediately.
    ///
    /// ### Parameters
    /// - `bars` - The array to mutate; only the compared pair is touched.
    ///
    /// ### Returns
    /// [`StepOutcome::Compared`] while sorting is in progress,
    /// [`StepOutcome::Done`] once the array is sorted.
    pub fn step(&mut self, bars: &mut BarArray) -> StepOutcome {
        if bars.len() < 2 {
            self.completed = true;
        }
        if self.completed {
            return StepOutcome::Done;
        }

        let i = self.cursor;
        let swapped = bars.values[i] > bars.values[i + 1];
        if swapped {
            bars.swap(i, i + 1);
            self.swaps_in_pass += 1;
            self.swaps += 1;
        }
        self.comparisons += 1;

        self.cursor += 1;
        if self.cursor == bars.len() - 1 {
            // Pass boundary: a clean pass means the array is sorted.
            self.passes += 1;
            if self.swaps_in_pass == 0 {
                self.completed = true;
            } else {
                self.cursor = 0;
                self.swaps_in_pass = 0;
            }
        }

        StepOutcome::Compared { swapped }
    }
}
