pub mod export;
pub mod query;

pub use export::{to_csv, CSV_COLUMNS};
pub use query::{apply, FilterColumn, NovelFilter, SortKey, SortOrder};
