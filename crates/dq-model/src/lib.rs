pub mod cell;
pub mod dataset;
pub mod dictionary;
pub mod error;
pub mod finding;
pub mod overrides;
pub mod rule;
pub mod stats;

pub use cell::Cell;
pub use dataset::{Dataset, Sheet};
pub use dictionary::{ColumnDescriptor, DataDictionary};
pub use error::{DqError, Result};
pub use finding::{DuplicateRecord, Finding};
pub use overrides::{OverrideKey, OverrideSet};
pub use rule::{ColumnRule, RuleKind};
pub use stats::{AggregateStats, CLEAN_RATE_PASS_THRESHOLD, Verdict};
