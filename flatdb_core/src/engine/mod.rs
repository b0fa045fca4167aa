pub mod execute;
pub mod format;
pub mod records;

pub use execute::{execute_command, load_records, table_info, TableInfo};
pub use format::format_select;
