//! Multi-file progress tracking for batch map generation

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Display state of one file: name, rows swept, total rows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileState {
    /// File name shown next to the bar
    pub name: String,
    /// Herringbone rows swept so far
    pub rows_done: usize,
    /// Herringbone rows in the whole map
    pub rows_total: usize,
}

/// Coordinates progress display for batch generation
///
/// Shows one bar per file for the most recent files, plus a batch bar when
/// there are more files than individual bars.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_states: Vec<FileState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Maps: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a progress manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Create bars for a batch of `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(ROW_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Register the file at `index` before its first row
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, FileState::default());
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = FileState {
                name,
                rows_done: 0,
                rows_total: 0,
            };
        }
        self.update_bars();
    }

    /// Report rows swept for the file at `index`
    pub fn update_rows(&mut self, index: usize, rows_done: usize, rows_total: usize) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.rows_done = rows_done;
            state.rows_total = rows_total;
        }
        self.update_bars();
    }

    /// Mark the file at `index` as finished
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.file_states.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.rows_done = state.rows_total;
        }
        self.update_bars();
    }

    /// Current display state of every registered file
    pub fn file_states(&self) -> &[FileState] {
        &self.file_states
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All maps generated");
        }
        let _ = self.multi_progress.clear();
    }

    // Show the most recent files on the available bars
    fn update_bars(&self) {
        let active: Vec<&FileState> = self
            .file_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();
        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, state) in self.file_bars.iter().zip(visible) {
            bar.set_length(state.rows_total as u64);
            bar.set_position(state.rows_done as u64);
            let width = state.rows_total.to_string().len();
            bar.set_message(format!("{:>width$}/{}", state.rows_done, state.rows_total));
            bar.set_prefix(state.name.clone());
        }

        for bar in self.file_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
