//! Template configuration: where every business term lives in the workbook.
//!
//! The configuration is a TOML document with three tables, named after the
//! sections of the SFTI `ExcelCellLocations` file:
//!
//! ```toml
//! [HeaderCell]
//! CATALOGUE_ID = "B3"
//!
//! [CodeLists]
//! LIST_COUNTRY_CODE = "A:B"
//!
//! [LineColIndex]
//! LINE_ID = 1
//! ```
//!
//! A [`TemplateConfig`] is an immutable value. Load it once and pass it to
//! every conversion; it is never mutated.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{KatalogError, Result};
use super::reference::{CellRef, ColumnRange};

const BUNDLED_TEMPLATE: &str = include_str!("../../config/ExcelCellLocations.toml");

/// Field locations for one version of the catalogue template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Header field name → cell reference on the `CatalogueHeader` sheet.
    #[serde(rename = "HeaderCell", default)]
    pub header_cells: BTreeMap<String, String>,
    /// Code-list name → column range on the `CodeLists` sheet.
    #[serde(rename = "CodeLists", default)]
    pub code_lists: BTreeMap<String, String>,
    /// Line field name → 1-based column on the `CatalogueLines` sheet.
    #[serde(rename = "LineColIndex", default)]
    pub line_columns: BTreeMap<String, u32>,
}

impl TemplateConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| KatalogError::Configuration(format!("invalid TOML: {e}")))
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            KatalogError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// The layout of the SFTI catalogue template shipped with this crate.
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_TEMPLATE)
    }

    /// Cell holding the header field `name`.
    pub fn header_cell(&self, name: &str) -> Result<CellRef> {
        let raw = self.header_cells.get(name).ok_or_else(|| {
            KatalogError::Configuration(format!(
                "header cell for {name} not found in the configuration"
            ))
        })?;
        raw.parse().map_err(|_| {
            KatalogError::Configuration(format!("header cell for {name} is not a cell: '{raw}'"))
        })
    }

    /// Column span of the code list `name`.
    pub fn code_list_range(&self, name: &str) -> Result<ColumnRange> {
        let raw = self.code_lists.get(name).ok_or_else(|| {
            KatalogError::Configuration(format!(
                "code list range for {name} not found in the configuration"
            ))
        })?;
        raw.parse().map_err(|_| {
            KatalogError::Configuration(format!(
                "code list range for {name} is not a column range: '{raw}'"
            ))
        })
    }

    /// 1-based column of the line field `name`.
    pub fn line_column(&self, name: &str) -> Result<u32> {
        match self.line_columns.get(name) {
            Some(0) => Err(KatalogError::Configuration(format!(
                "column index for {name} must be 1 or greater"
            ))),
            Some(col) => Ok(*col),
            None => Err(KatalogError::Configuration(format!(
                "column index for {name} not found in the configuration"
            ))),
        }
    }

    /// Check that every listed header and line field has a usable location.
    ///
    /// Returns the first offending field as a [`KatalogError::Configuration`].
    pub fn ensure_fields<'a>(
        &self,
        header: impl IntoIterator<Item = &'a str>,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<()> {
        for name in header {
            self.header_cell(name)?;
        }
        for name in lines {
            self.line_column(name)?;
        }
        Ok(())
    }
}
