//! Template plumbing shared by every output: errors, configuration,
//! workbook access, code lists and template shape checks.

mod codelist;
mod config;
mod error;
pub mod reference;
mod template;
mod workbook;

pub use codelist::*;
pub use config::*;
pub use error::*;
pub use reference::{CellRef, ColumnRange};
pub use template::*;
pub use workbook::*;
