//! Interpreter constants and runtime configuration defaults

// Logging
/// Filter applied when neither `RUST_LOG` nor `-v` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Filters selected by repeated `-v` flags, starting at one flag
pub const VERBOSE_LOG_FILTERS: [&str; 3] = ["info", "debug", "trace"];

// Script syntax
/// Lines starting with this prefix are ignored
pub const COMMENT_PREFIX: char = '#';
/// Separator between direction tokens in a trace command
pub const DIRECTION_SEPARATOR: char = ',';

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Lines executed between progress bar refreshes
pub const PROGRESS_REFRESH_LINES: u64 = 64;
