/// Counters accumulated over one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    /// Styles that were loaded, renamed and exported
    pub styles_processed: usize,
    /// Styles skipped because their input font was missing
    pub styles_skipped: usize,
    /// Per-region TTF files written
    pub fonts_written: usize,
    /// TTC collections written
    pub collections_written: usize,
}

impl RenameReport {
    /// Get a one-line summary of the run
    pub fn summary(&self) -> String {
        format!(
            "{} styles processed ({} skipped), {} fonts written, {} collections written",
            self.styles_processed, self.styles_skipped, self.fonts_written, self.collections_written
        )
    }
}
