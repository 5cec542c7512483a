//! Per-file result reporting.
//!
//! Every processed input file produces:
//!
//! - one summary line on standard output, and
//! - one row appended to the tab-separated results table.
//!
//! | Result | Row | Summary |
//! |--------|-----|---------|
//! | No match | `input  NA  Unavailable` | `input: Unavailable` |
//! | One species | `input  species` | `input: species` |
//! | Several species | `input  first  Multiple results  others...` | `input: Multiple results, please check the output file` |

pub mod summary;
pub mod table;

pub use summary::{summary_line, FileReport};
pub use table::{row_fields, ReportTable, TABLE_HEADER};
