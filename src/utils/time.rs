//! Wall-clock duration formatting.

use std::time::Duration;

/// Format a duration as `{h}h{m}m{s}s`, each part with one decimal.
///
/// Hours and minutes are whole numbers; seconds keep their fraction.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use bac_species::utils::time::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::from_secs_f64(3725.4)), "1.0h2.0m5.4s");
/// ```
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    let hours = (secs / 3600.0).floor();
    let minutes = ((secs % 3600.0) / 60.0).floor();
    let seconds = secs % 60.0;
    format!("{hours:.1}h{minutes:.1}m{seconds:.1}s")
}
