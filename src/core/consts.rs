pub const DEFAULT_DISK_COUNT: usize = 3;
pub const DEFAULT_ROD_COUNT: usize = 3;

/// Starts every rod group in a tower label.
pub const ROD_SEPARATOR: char = '_';
/// Follows every disk size in a label once any disk needs two digits.
pub const WIDE_DISK_TERMINATOR: char = '.';

pub const PROGRESS_RENDER_INTERVAL_MS: u64 = 250;
