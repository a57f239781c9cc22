//! Rule-based validation over adapted datasets.
//!
//! The engine is synchronous, CPU-bound, and stateless between invocations:
//! each run is a pure function of the dataset, the dictionary, and the
//! comparison date. Sheets are fully independent, so callers may validate a
//! workbook's sheets sequentially or in parallel.

mod aggregate;
mod date;
mod duplicates;
mod executor;

pub use aggregate::aggregate;
pub use date::parse_cell_date;
pub use duplicates::{FINGERPRINT_SEPARATOR, find_duplicates};
pub use executor::{SheetFindings, validate};
