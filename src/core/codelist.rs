//! Code lists embedded in the `CodeLists` sheet.
//!
//! Each list occupies 2–5 adjacent columns: a human-readable label, the code
//! the output schema expects, and up to three auxiliary attributes. Data starts
//! at row 3 and ends at the first row where either label or code is blank.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::config::TemplateConfig;
use super::error::{KatalogError, Result};
use super::reference::ColumnRange;
use super::workbook::{CODE_LISTS_SHEET, Sheet, Workbook};

/// First data row of every code list.
const FIRST_ROW: u32 = 3;

/// One code-list entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeEntry {
    pub code: String,
    pub attr1: Option<String>,
    pub attr2: Option<String>,
    pub attr3: Option<String>,
}

/// Which column of an entry a lookup returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeColumn {
    Code,
    Attr1,
    Attr2,
    Attr3,
}

/// Label → entry mapping for one code list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeList {
    entries: HashMap<String, CodeEntry>,
}

impl CodeList {
    /// Scan `range` on `sheet` from row 3 until the first incomplete row.
    ///
    /// A label that appears twice keeps the entry of its last occurrence.
    pub fn load(sheet: &Sheet, range: ColumnRange) -> Result<Self> {
        let width = range.width();
        if !(2..=5).contains(&width) {
            return Err(KatalogError::Configuration(format!(
                "code list with incorrect range: {range} = {width}"
            )));
        }

        let attr = |row: u32, offset: u32| {
            (offset < width)
                .then(|| sheet.text(row, range.start + offset))
                .flatten()
        };

        let mut entries = HashMap::new();
        for row in FIRST_ROW..=sheet.last_row() {
            let (Some(label), Some(code)) =
                (sheet.text(row, range.start), sheet.text(row, range.start + 1))
            else {
                break;
            };
            let entry = CodeEntry {
                code,
                attr1: attr(row, 2),
                attr2: attr(row, 3),
                attr3: attr(row, 4),
            };
            if entries.insert(label.clone(), entry).is_some() {
                warn!(label = %label, range = %range, row, "duplicate code list label, keeping the last entry");
            }
        }
        Ok(Self { entries })
    }

    /// Build a list directly from entries.
    pub fn from_entries<L: Into<String>>(entries: impl IntoIterator<Item = (L, CodeEntry)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(label, entry)| (label.into(), entry))
                .collect(),
        }
    }

    pub fn get(&self, label: &str) -> Option<&CodeEntry> {
        self.entries.get(label)
    }

    /// The requested column for `label`; unmapped labels and blank columns
    /// yield `None`.
    pub fn lookup(&self, label: &str, column: CodeColumn) -> Option<&str> {
        let entry = self.entries.get(label)?;
        match column {
            CodeColumn::Code => Some(entry.code.as_str()),
            CodeColumn::Attr1 => entry.attr1.as_deref(),
            CodeColumn::Attr2 => entry.attr2.as_deref(),
            CodeColumn::Attr3 => entry.attr3.as_deref(),
        }
    }

    /// The code for `label`, or `""` when the label is not in the list.
    pub fn code(&self, label: &str) -> &str {
        self.lookup(label, CodeColumn::Code).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The code lists a catalogue template carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListKind {
    Country,
    PriceType,
    Vat,
    Unit,
    ItemClassification,
    ItemProperty,
    ItemAttribute,
    ItemMeasure,
    CertificateEnvironmental,
    CertificateNutrition,
    Availability,
}

impl ListKind {
    pub const ALL: [ListKind; 11] = [
        ListKind::Country,
        ListKind::PriceType,
        ListKind::Vat,
        ListKind::Unit,
        ListKind::ItemClassification,
        ListKind::ItemProperty,
        ListKind::ItemAttribute,
        ListKind::ItemMeasure,
        ListKind::CertificateEnvironmental,
        ListKind::CertificateNutrition,
        ListKind::Availability,
    ];

    /// Key of the list's column range in the `[CodeLists]` configuration table.
    pub fn config_key(self) -> &'static str {
        match self {
            ListKind::Country => "LIST_COUNTRY_CODE",
            ListKind::PriceType => "LIST_PRICE_TYPE",
            ListKind::Vat => "LIST_VAT_CODE",
            ListKind::Unit => "LIST_UNIT_CODE",
            ListKind::ItemClassification => "LIST_ITEM_CLASSIFICATION_CODE",
            ListKind::ItemProperty => "LIST_ITEM_PROPERTY_CODE",
            ListKind::ItemAttribute => "LIST_ITEM_ATTRIBUTE_CODE",
            ListKind::ItemMeasure => "LIST_ITEM_MEASURE_CODE",
            ListKind::CertificateEnvironmental => "LIST_ITEM_CERTIFICATE_ENV_CODE",
            ListKind::CertificateNutrition => "LIST_ITEM_CERTIFICATE_NUTR_CODE",
            ListKind::Availability => "LIST_ITEM_AVAILABILITY_CODE",
        }
    }
}

/// All code lists of one workbook, loaded once per conversion.
#[derive(Debug, Clone, Default)]
pub struct CodeLists {
    lists: HashMap<ListKind, CodeList>,
}

impl CodeLists {
    /// Load every [`ListKind`] from the `CodeLists` sheet.
    pub fn load(workbook: &Workbook, config: &TemplateConfig) -> Result<Self> {
        let sheet = workbook.required_sheet(CODE_LISTS_SHEET)?;
        let mut lists = HashMap::with_capacity(ListKind::ALL.len());
        for kind in ListKind::ALL {
            let range = config.code_list_range(kind.config_key())?;
            let list = CodeList::load(sheet, range)?;
            debug!(list = kind.config_key(), %range, entries = list.len(), "loaded code list");
            lists.insert(kind, list);
        }
        Ok(Self { lists })
    }

    /// Replace or add one list.
    pub fn with_list(mut self, kind: ListKind, list: CodeList) -> Self {
        self.lists.insert(kind, list);
        self
    }

    pub fn list(&self, kind: ListKind) -> Option<&CodeList> {
        self.lists.get(&kind)
    }

    /// Look up `label` in the list `kind`.
    pub fn lookup(&self, kind: ListKind, label: &str, column: CodeColumn) -> Option<&str> {
        self.list(kind)?.lookup(label, column)
    }
}
