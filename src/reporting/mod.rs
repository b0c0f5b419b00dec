pub mod assembler;
pub mod formatter;
pub mod metadata;

pub use assembler::{read_export_record, to_json_pretty, write_deliverables};
pub use metadata::load_run_metadata;
