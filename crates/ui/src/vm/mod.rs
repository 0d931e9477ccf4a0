mod code_vm;
mod row_vm;
mod table_vm;

pub use code_vm::{code_block_html, sanitize_html};
pub use row_vm::{RowVm, map_rows};
pub use table_vm::{ColumnVm, TableRowVm, TableVm};
