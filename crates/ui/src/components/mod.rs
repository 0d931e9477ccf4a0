mod data_table;
mod progress;
mod section;

pub use data_table::DataTable;
pub use progress::ProgressBar;
pub use section::SectionBlock;
