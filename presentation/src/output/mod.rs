//! Output formatting for loaded catalogs

pub mod console;
pub mod formatter;
