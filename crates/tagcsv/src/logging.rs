//! Row-level log helpers.
//!
//! Cell values may hold personal data, so rows are logged as
//! [`REDACTED_VALUE`] unless [`CsvOptions::log_values`](crate::CsvOptions)
//! is enabled. The crate only emits `tracing` events and never installs a
//! subscriber.

use std::fmt;

/// Placeholder used when value logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Returns the input value when value logging is enabled, otherwise a
/// redacted token.
pub fn redact_value(value: &str, log_values: bool) -> &str {
    if log_values { value } else { REDACTED_VALUE }
}

/// Lazily formatted row of cells for `tracing` fields.
pub(crate) struct Cells<'a, C> {
    cells: &'a [C],
    log_values: bool,
}

impl<'a, C: AsRef<[u8]>> Cells<'a, C> {
    pub(crate) fn new(cells: &'a [C], log_values: bool) -> Self {
        Self { cells, log_values }
    }
}

impl<C: AsRef<[u8]>> fmt::Display for Cells<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.log_values {
            return f.write_str(REDACTED_VALUE);
        }
        f.write_str("[")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", String::from_utf8_lossy(cell.as_ref()))?;
        }
        f.write_str("]")
    }
}
