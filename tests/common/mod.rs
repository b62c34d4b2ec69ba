//! Catalogue template fixtures built in memory, laid out by the bundled
//! configuration.

#![allow(dead_code)]

use std::collections::BTreeMap;

use calamine::{Data, ExcelDateTime, ExcelDateTimeType, Range};
use katalog::catalogue::fields::*;
use katalog::{
    CODE_LISTS_SHEET, HEADER_SHEET, LINES_SHEET, ListKind, Sheet, TemplateConfig, Workbook,
};

/// Number of line columns in the published template.
pub const LINE_COLUMNS: u32 = 103;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    /// Excel serial date.
    Date(f64),
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_owned())
    }
}

/// A catalogue workbook under construction. Coordinates are 1-based.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub config: TemplateConfig,
    sheets: BTreeMap<&'static str, BTreeMap<(u32, u32), Cell>>,
    next_line_row: u32,
    next_code_row: BTreeMap<ListKind, u32>,
}

impl Fixture {
    /// Template with numbered line columns and no data.
    pub fn empty() -> Self {
        let mut fixture = Self {
            config: TemplateConfig::bundled().unwrap(),
            sheets: BTreeMap::new(),
            next_line_row: 3,
            next_code_row: BTreeMap::new(),
        };
        for sheet in [HEADER_SHEET, LINES_SHEET, CODE_LISTS_SHEET] {
            fixture.sheets.insert(sheet, BTreeMap::new());
        }
        for column in 1..=LINE_COLUMNS {
            fixture.set(LINES_SHEET, 1, column, Cell::Number(f64::from(column)));
        }
        let names: Vec<(String, u32)> = fixture
            .config
            .line_columns
            .iter()
            .map(|(name, column)| (name.clone(), *column))
            .collect();
        for (name, column) in names {
            fixture.set(LINES_SHEET, 2, column, Cell::Text(name));
        }
        fixture
    }

    /// Template with a filled-in header and the code lists most lines use.
    pub fn new() -> Self {
        Self::empty()
            .header(CATALOGUE_ID, "CAT-1")
            .header(ACTIONCODE, "Add")
            .header(CATALOGUE_NAME, "Spring catalogue")
            .header(CATALOGUE_ISSUEDATE, "2024-01-15 00:00:00")
            .header(CURRENCY_ID, "SEK")
            .header(PROVIDER_SUPPLIER_ENDPOINT_ID, "5560000001")
            .header(PROVIDER_SUPPLIER_ENDPOINT_ID_SCHEMEID, "0007")
            .header(PROVIDER_SUPPLIER_NAME, "Leverantören AB")
            .header(RECEIVER_BUYER_ENDPOINT_ID, "2120000001")
            .header(RECEIVER_BUYER_ENDPOINT_ID_SCHEMEID, "0007")
            .header(RECEIVER_BUYER_NAME, "Kommunen")
            .code(ListKind::Unit, "Styck", "EA", &[])
            .code(ListKind::Unit, "Kartong", "CT", &[])
            .code(ListKind::PriceType, "Nettopris", "NET", &[])
            .code(ListKind::Vat, "25", "S", &[])
            .code(ListKind::Country, "Sverige", "SE", &[])
    }

    pub fn set(&mut self, sheet: &'static str, row: u32, column: u32, cell: Cell) {
        self.sheets.entry(sheet).or_default().insert((row, column), cell);
    }

    pub fn header(self, field: &str, value: &str) -> Self {
        self.header_cell(field, Cell::from(value))
    }

    pub fn header_cell(mut self, field: &str, cell: Cell) -> Self {
        let at = self.config.header_cell(field).unwrap();
        self.set(HEADER_SHEET, at.row, at.column, cell);
        self
    }

    /// Append a line row with the given fields.
    pub fn line(mut self, fields: &[(&str, &str)]) -> Self {
        let row = self.next_line_row;
        for (field, value) in fields {
            let column = self.config.line_column(field).unwrap();
            self.set(LINES_SHEET, row, column, Cell::from(*value));
        }
        self.next_line_row += 1;
        self
    }

    /// Append a line with only an id, a name and a base price.
    pub fn simple_line(self, id: &str) -> Self {
        self.line(&[
            (LINE_ID, id),
            (ITEM_NAME, "Pennor"),
            (PRICEAMOUNT, "10"),
        ])
    }

    /// Append an empty row.
    pub fn blank_line(mut self) -> Self {
        self.next_line_row += 1;
        self
    }

    /// Append an entry to a code list.
    pub fn code(mut self, kind: ListKind, label: &str, code: &str, attrs: &[&str]) -> Self {
        let range = self.config.code_list_range(kind.config_key()).unwrap();
        let row = *self.next_code_row.get(&kind).unwrap_or(&3);
        let values = [label, code].into_iter().chain(attrs.iter().copied());
        for (offset, value) in values.enumerate() {
            self.set(CODE_LISTS_SHEET, row, range.start + offset as u32, Cell::from(value));
        }
        self.next_code_row.insert(kind, row + 1);
        self
    }

    /// Drop a sheet entirely.
    pub fn without_sheet(mut self, sheet: &str) -> Self {
        self.sheets.retain(|name, _| *name != sheet);
        self
    }

    /// The workbook as calamine would load it.
    pub fn workbook(&self) -> Workbook {
        Workbook::from_sheets(self.sheets.iter().map(|(name, cells)| (*name, sheet(cells))))
    }

    /// The workbook written as a real `.xlsx` file image.
    pub fn xlsx_bytes(&self) -> Vec<u8> {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let date_format = rust_xlsxwriter::Format::new().set_num_format("yyyy-mm-dd");
        for (name, cells) in &self.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(*name).unwrap();
            for ((row, column), cell) in cells {
                let (row, column) = (row - 1, (column - 1) as u16);
                match cell {
                    Cell::Text(s) => worksheet.write_string(row, column, s).unwrap(),
                    Cell::Number(n) => worksheet.write_number(row, column, *n).unwrap(),
                    Cell::Date(d) => worksheet
                        .write_number_with_format(row, column, *d, &date_format)
                        .unwrap(),
                };
            }
        }
        workbook.save_to_buffer().unwrap()
    }
}

fn sheet(cells: &BTreeMap<(u32, u32), Cell>) -> Sheet {
    let rows = cells.keys().map(|(r, _)| *r).max().unwrap_or(1);
    let columns = cells.keys().map(|(_, c)| *c).max().unwrap_or(1);
    let mut range = Range::new((0, 0), (rows - 1, columns - 1));
    for ((row, column), cell) in cells {
        let data = match cell {
            Cell::Text(s) => Data::String(s.clone()),
            Cell::Number(n) => Data::Float(*n),
            Cell::Date(d) => Data::DateTime(ExcelDateTime::new(*d, ExcelDateTimeType::DateTime, false)),
        };
        range.set_value((row - 1, column - 1), data);
    }
    Sheet::from(range)
}

/// Text between `<element>` and the matching close tag, for every occurrence.
pub fn texts<'a>(xml: &'a str, element: &str) -> Vec<&'a str> {
    let open = format!("<{element}>");
    let close = format!("</{element}>");
    let mut out = Vec::new();
    let mut rest = xml;
    while let Some(start) = rest.find(&open) {
        let after = &rest[start + open.len()..];
        let Some(end) = after.find(&close) else { break };
        out.push(&after[..end]);
        rest = &after[end + close.len()..];
    }
    out
}
