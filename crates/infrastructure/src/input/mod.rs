pub mod csv_source;
pub mod table_source;

pub use csv_source::CsvTargetSource;
pub use table_source::{is_identifier, SqliteTableTargetSource};
