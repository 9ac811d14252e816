//! Progress display for script execution

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_REFRESH_LINES};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressFinish, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static LINE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{msg}} [{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} lines"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Line counter drawn on stderr while a script runs
///
/// A hidden instance is used for standard input and quiet runs; every method
/// is then a no-op.
pub struct ScriptProgress {
    bar: ProgressBar,
}

impl ScriptProgress {
    /// Progress that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Progress bar for a script of `total_lines` lines
    pub fn for_script(path: &Path, total_lines: u64) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(total_lines),
            ProgressDrawTarget::stderr_with_hz(20),
        )
        .with_finish(ProgressFinish::AndClear);
        bar.set_style(LINE_STYLE.clone());
        let name = path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned());
        bar.set_message(name);
        Self { bar }
    }

    /// Count one processed line
    pub fn advance(&self) {
        self.bar.inc(1);
        if self.bar.position() % PROGRESS_REFRESH_LINES == 0 {
            self.bar.tick();
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ScriptProgress {
    fn default() -> Self {
        Self::hidden()
    }
}
