pub mod csv_export;
pub mod csv_import;

pub use csv_export::export_csv;
pub use csv_import::{import_csv, ImportOutcome};

/// CSV column names, in file order.
pub const COLUMNS: [&str; 5] = ["Task", "Start_Date", "End_Date", "Status", "Remark"];
