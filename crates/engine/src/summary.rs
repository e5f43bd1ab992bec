use crate::selection::SelectionMode;

/// Default label shown above the filter input.
pub const DEFAULT_FILTER_LABEL: &str = "Filter";

/// Counts rendered next to the filter input label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    pub mode: SelectionMode,
    pub selected: usize,
    pub filtered: usize,
}

impl FilterSummary {
    /// Render `label (filtered)` when selection is disabled, otherwise
    /// `label (selected/filtered)`.
    #[must_use]
    pub fn render(&self, label: &str) -> String {
        if self.mode.allows_selection() {
            format!("{label} ({}/{})", self.selected, self.filtered)
        } else {
            format!("{label} ({})", self.filtered)
        }
    }
}
