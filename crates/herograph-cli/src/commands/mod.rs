//! Command implementations.

pub mod common;
pub mod count;
pub mod fetch;
pub mod names;
pub mod show;
pub mod table;

pub use self::common::execute_common;
pub use self::count::execute_count;
pub use self::fetch::execute_fetch;
pub use self::names::execute_names;
pub use self::show::execute_show;
pub use self::table::execute_table;
