//! Spreadsheet coordinates as written in the template configuration.
//!
//! Rows and columns are 1-based, matching what a user sees in Excel.

use std::fmt;
use std::str::FromStr;

use super::error::KatalogError;

/// Convert spreadsheet column letters (`"A"`, `"AB"`) to a 1-based column number.
pub fn column_number(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    letters.chars().try_fold(0u32, |acc, c| {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = u32::from(c.to_ascii_uppercase() as u8 - b'A') + 1;
        acc.checked_mul(26)?.checked_add(digit)
    })
}

/// Convert a 1-based column number back to its letters.
pub fn column_letters(mut number: u32) -> String {
    let mut letters = Vec::new();
    while number > 0 {
        let rem = (number - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        number = (number - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// A single cell address such as `B7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    /// 1-based row.
    pub row: u32,
    /// 1-based column.
    pub column: u32,
}

impl CellRef {
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

impl FromStr for CellRef {
    type Err = KatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| KatalogError::Configuration(format!("invalid cell reference '{s}'")))?;
        let (letters, digits) = s.split_at(split);
        let column = column_number(letters);
        let row = digits.parse::<u32>().ok().filter(|r| *r > 0);
        match (column, row) {
            (Some(column), Some(row)) => Ok(Self { row, column }),
            _ => Err(KatalogError::Configuration(format!(
                "invalid cell reference '{s}'"
            ))),
        }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letters(self.column), self.row)
    }
}

/// An inclusive column span such as `S:W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRange {
    /// First column (1-based).
    pub start: u32,
    /// Last column (1-based, inclusive).
    pub end: u32,
}

impl ColumnRange {
    /// Number of columns covered by the range.
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.start) + 1
    }
}

impl FromStr for ColumnRange {
    type Err = KatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || KatalogError::Configuration(format!("invalid column range '{s}'"));
        let (start, end) = s.trim().split_once(':').ok_or_else(invalid)?;
        let start = column_number(start.trim()).ok_or_else(invalid)?;
        let end = column_number(end.trim()).ok_or_else(invalid)?;
        if end < start {
            return Err(invalid());
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for ColumnRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            column_letters(self.start),
            column_letters(self.end)
        )
    }
}
