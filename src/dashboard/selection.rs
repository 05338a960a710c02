//! Cyclic plot selection.
//!
//! The START button walks the eligible plot ids in order, wrapping back to
//! the first after the last. "No plot chosen" is an explicit state rather
//! than a sentinel index; the view layer holds the only mutable copy and
//! updates it once per interaction.

use thiserror::Error;

/// Errors from selection operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Cycling was requested with zero eligible plots. Recovered by the
    /// view as a no-op, never a crash.
    #[error("no eligible plots to cycle through")]
    EmptyCollection,
}

/// The currently selected plot: position in the eligible id list plus the
/// id itself (kept together so the view never re-derives one from the other).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPlot {
    pub index: usize,
    pub plot_id: String,
}

/// Transient selection state owned by the view. Resets to `fresh()` on
/// every reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotSelection {
    current: Option<SelectedPlot>,
}

impl PlotSelection {
    /// No plot chosen yet.
    pub fn fresh() -> Self {
        PlotSelection { current: None }
    }

    pub fn current(&self) -> Option<&SelectedPlot> {
        self.current.as_ref()
    }

    pub fn current_plot_id(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.plot_id.as_str())
    }

    /// Compute the next selection without mutating this one.
    ///
    /// From a fresh state the first call lands on index 0; afterwards
    /// `new_index = (index + 1) % ids.len()`, so `ids.len()` calls visit
    /// every id exactly once, in order, and return to the start.
    pub fn advance(&self, ids: &[String]) -> Result<SelectedPlot, SelectionError> {
        if ids.is_empty() {
            return Err(SelectionError::EmptyCollection);
        }

        let index = match &self.current {
            Some(selected) => (selected.index + 1) % ids.len(),
            None => 0,
        };

        Ok(SelectedPlot {
            index,
            plot_id: ids[index].clone(),
        })
    }

    /// Apply the result of `advance`. Split from it so the read-modify-write
    /// stays a single assignment at the call site.
    pub fn select(&mut self, selected: SelectedPlot) {
        self.current = Some(selected);
    }

    /// Advance in place, treating an empty collection as a no-op.
    pub fn advance_in_place(&mut self, ids: &[String]) -> Result<SelectedPlot, SelectionError> {
        let next = self.advance(ids)?;
        self.current = Some(next.clone());
        Ok(next)
    }
}
