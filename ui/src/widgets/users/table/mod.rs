//! Table components for the users panel, split into:
//! - `columns`: column definitions and widths
//! - `header`: header row rendering
//! - `row`: individual row rendering

pub mod columns;
pub mod header;
pub mod row;
