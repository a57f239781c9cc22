pub mod adapter;
pub mod csv_sheet;
pub mod dictionary;

pub use adapter::{AdapterOptions, MAX_ROWS, adapt_sheet};
pub use csv_sheet::read_csv_sheet;
pub use dictionary::load_dictionary;
