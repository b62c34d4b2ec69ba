//! Spreadsheet access.
//!
//! Workbooks are read with `calamine` and kept in memory as plain cell
//! ranges. Cell values cross into the rest of the crate as `Option<String>`:
//! empty cells, error cells, whitespace and the `None` placeholder written by
//! older template exports all become `None`.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use super::error::{KatalogError, Result};
use super::reference::CellRef;

/// Sheet carrying the catalogue header fields.
pub const HEADER_SHEET: &str = "CatalogueHeader";
/// Sheet carrying one catalogue line per row from row 3.
pub const LINES_SHEET: &str = "CatalogueLines";
/// Sheet carrying the code lists.
pub const CODE_LISTS_SHEET: &str = "CodeLists";

/// Placeholder some template exports write into empty cells.
const NONE_PLACEHOLDER: &str = "None";

/// A loaded workbook: sheet name → cell range.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: HashMap<String, Sheet>,
}

impl Workbook {
    /// Read a workbook from disk (`.xlsx`, `.xlsm`, `.xls`, `.xlsb`, `.ods`).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let workbook = open_workbook_auto(path)
            .map_err(|e| KatalogError::InvalidInputFormat(format!("{}: {e}", path.display())))?;
        Self::read_all(workbook)
    }

    /// Read a workbook from an in-memory file image.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| KatalogError::InvalidInputFormat(e.to_string()))?;
        Self::read_all(workbook)
    }

    /// Assemble a workbook from already-built sheets.
    pub fn from_sheets<N: Into<String>>(sheets: impl IntoIterator<Item = (N, Sheet)>) -> Self {
        Self {
            sheets: sheets
                .into_iter()
                .map(|(name, sheet)| (name.into(), sheet))
                .collect(),
        }
    }

    fn read_all<RS>(mut workbook: Sheets<RS>) -> Result<Self>
    where
        RS: std::io::Read + std::io::Seek,
    {
        let names = workbook.sheet_names().to_owned();
        let mut sheets = HashMap::with_capacity(names.len());
        for name in names {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| KatalogError::InvalidInputFormat(format!("sheet {name}: {e}")))?;
            sheets.insert(name, Sheet::from(range));
        }
        Ok(Self { sheets })
    }

    /// Look up a sheet by exact name.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }

    /// Like [`Workbook::sheet`], but a missing sheet is a template error.
    pub fn required_sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheet(name).ok_or_else(|| {
            KatalogError::TemplateShape(format!(
                "sheet '{name}' is missing, the workbook is not a valid catalogue template"
            ))
        })
    }

    /// Names of all sheets, sorted.
    pub fn sheet_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sheets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// One worksheet. All coordinates are 1-based.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    range: Range<Data>,
}

impl From<Range<Data>> for Sheet {
    fn from(range: Range<Data>) -> Self {
        Self { range }
    }
}

impl Sheet {
    /// Text of the cell at (`row`, `column`), or `None` when it holds no value.
    pub fn text(&self, row: u32, column: u32) -> Option<String> {
        if row == 0 || column == 0 {
            return None;
        }
        self.range
            .get_value((row - 1, column - 1))
            .and_then(cell_text)
    }

    /// Text of the cell at `cell`.
    pub fn text_at(&self, cell: CellRef) -> Option<String> {
        self.text(cell.row, cell.column)
    }

    /// Last populated row (1-based), or 0 for an empty sheet.
    pub fn last_row(&self) -> u32 {
        self.range.end().map_or(0, |(row, _)| row + 1)
    }

    /// Last populated column (1-based), or 0 for an empty sheet.
    pub fn last_column(&self) -> u32 {
        self.range.end().map_or(0, |(_, col)| col + 1)
    }
}

/// Render a cell the way a user reads it in the template.
///
/// Numbers lose float noise and integral values their fraction, date-times
/// become `YYYY-MM-DD HH:MM:SS` so that the date part can be cut at the first
/// space.
pub fn cell_text(data: &Data) -> Option<String> {
    let text = match data {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) => s.trim().to_owned(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_number(*f),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => ndt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => format_number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => s.trim().replacen('T', " ", 1),
        Data::DurationIso(s) => s.trim().to_owned(),
    };
    if text.is_empty() || text == NONE_PLACEHOLDER {
        None
    } else {
        Some(text)
    }
}

fn format_number(f: f64) -> String {
    match Decimal::from_f64(f) {
        Some(d) => d.normalize().to_string(),
        None => f.to_string(),
    }
}
