//! Admin student list: filtering, paging, row mapping and CSV export.

pub mod export;
pub mod login;
pub mod query;
pub mod rows;

pub use export::{export_file_name, to_csv};
pub use login::AdminLoginForm;
pub use query::StudentQuery;
pub use rows::{PageWindow, StudentRow};
