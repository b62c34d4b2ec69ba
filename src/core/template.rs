//! Template shape checks, run before anything is converted.

use super::error::{KatalogError, Result};
use super::workbook::{CODE_LISTS_SHEET, HEADER_SHEET, LINES_SHEET, Workbook};

/// Verify that `workbook` still has the shape of the catalogue template.
///
/// All three template sheets must exist, and row 1 of `CatalogueLines` must
/// number its columns `1, 2, 3, …` so that configured column ordinals still
/// point at the intended fields. Checking stops at the first blank header cell.
pub fn validate_template(workbook: &Workbook) -> Result<()> {
    for name in [HEADER_SHEET, LINES_SHEET, CODE_LISTS_SHEET] {
        if workbook.sheet(name).is_none() {
            return Err(KatalogError::TemplateShape(format!(
                "Excel sheet names not according to SFTI template, '{name}' is missing"
            )));
        }
    }

    let lines = workbook.required_sheet(LINES_SHEET)?;
    for column in 1..=lines.last_column() {
        let Some(label) = lines.text(1, column) else {
            break;
        };
        if label != column.to_string() {
            return Err(KatalogError::TemplateShape(format!(
                "column index not correct for column {column} (found '{label}'), \
                 ensure that the SFTI template has not been altered"
            )));
        }
    }
    Ok(())
}
