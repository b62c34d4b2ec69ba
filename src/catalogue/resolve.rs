//! Turning rule values into text for one header or one line.

use crate::core::{CodeColumn, CodeLists, ListKind, Result, Sheet, TemplateConfig};

use super::rules::{Value, When};
use super::xml_utils::has_text;

/// Where field values come from.
pub trait FieldSource {
    /// Cell text of `field`, or `None` when the cell is blank.
    ///
    /// A field missing from the configuration is an error.
    fn field(&self, name: &str) -> Result<Option<String>>;
}

/// Header fields: one configured cell each on the `CatalogueHeader` sheet.
pub struct HeaderFields<'a> {
    sheet: &'a Sheet,
    config: &'a TemplateConfig,
}

impl<'a> HeaderFields<'a> {
    pub fn new(sheet: &'a Sheet, config: &'a TemplateConfig) -> Self {
        Self { sheet, config }
    }
}

impl FieldSource for HeaderFields<'_> {
    fn field(&self, name: &str) -> Result<Option<String>> {
        Ok(self.sheet.text_at(self.config.header_cell(name)?))
    }
}

/// Line fields: configured columns of one `CatalogueLines` row.
pub struct LineRow<'a> {
    sheet: &'a Sheet,
    config: &'a TemplateConfig,
    row: u32,
}

impl<'a> LineRow<'a> {
    pub fn new(sheet: &'a Sheet, config: &'a TemplateConfig, row: u32) -> Self {
        Self { sheet, config, row }
    }
}

impl FieldSource for LineRow<'_> {
    fn field(&self, name: &str) -> Result<Option<String>> {
        Ok(self.sheet.text(self.row, self.config.line_column(name)?))
    }
}

/// Resolves [`Value`]s and [`When`]s against one field source.
pub struct Resolver<'a, S> {
    source: &'a S,
    lists: &'a CodeLists,
    currency: Option<&'a str>,
}

impl<'a, S: FieldSource> Resolver<'a, S> {
    pub fn new(source: &'a S, lists: &'a CodeLists, currency: Option<&'a str>) -> Self {
        Self {
            source,
            lists,
            currency,
        }
    }

    pub fn field(&self, name: &str) -> Result<Option<String>> {
        self.source.field(name)
    }

    /// Text of `value`, or `None` when it resolves to nothing or to blank text.
    pub fn value(&self, value: &Value) -> Result<Option<String>> {
        let text = match *value {
            Value::Field(f) => self.field(f)?,
            Value::Const(s) => Some(s.to_owned()),
            Value::Date(f) => self.field(f)?.map(|s| date_part(&s).to_owned()),
            Value::Code {
                field,
                list,
                column,
            } => self
                .field(field)?
                .and_then(|label| self.lookup(list, &label, column)),
            Value::Country(f) => self.field(f)?.and_then(|c| {
                if c.chars().count() == 2 {
                    Some(c)
                } else {
                    self.lookup(ListKind::Country, &c, CodeColumn::Code)
                }
            }),
            Value::Flag {
                field,
                token,
                matched,
                otherwise,
            } => {
                let hit = self.field(field)?.is_some_and(|v| v.eq_ignore_ascii_case(token));
                Some(if hit { matched } else { otherwise }.to_owned())
            }
            Value::Currency => self.currency.map(str::to_owned),
        };
        Ok(text.filter(|t| has_text(t)))
    }

    /// Whether a group guarded by `when` is written.
    pub fn holds(&self, when: &When) -> Result<bool> {
        Ok(match *when {
            When::Always => true,
            When::Present(f) => self.field(f)?.is_some(),
            When::AnyPresent(fields) => {
                let mut any = false;
                for f in fields {
                    any |= self.field(f)?.is_some();
                }
                any
            }
            When::Equals(f, token) => self.field(f)?.is_some_and(|v| v.eq_ignore_ascii_case(token)),
            When::Resolves(ref value) => self.value(value)?.is_some(),
        })
    }

    fn lookup(&self, list: ListKind, label: &str, column: CodeColumn) -> Option<String> {
        self.lists.lookup(list, label, column).map(str::to_owned)
    }
}

/// The date part of a `YYYY-MM-DD HH:MM:SS` cell rendering.
pub fn date_part(text: &str) -> &str {
    text.split_once(' ').map_or(text, |(date, _)| date)
}

/// Non-empty, trimmed segments of a `;`-separated list.
pub fn split_values(text: &str) -> impl Iterator<Item = &str> {
    text.split(';').map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CodeEntry, CodeList};
    use std::collections::HashMap;

    struct Fields(HashMap<&'static str, &'static str>);

    impl FieldSource for Fields {
        fn field(&self, name: &str) -> Result<Option<String>> {
            Ok(self.0.get(name).map(|v| (*v).to_owned()))
        }
    }

    fn fields(pairs: &[(&'static str, &'static str)]) -> Fields {
        Fields(pairs.iter().copied().collect())
    }

    fn lists() -> CodeLists {
        let entry = |code: &str| CodeEntry {
            code: code.into(),
            ..CodeEntry::default()
        };
        CodeLists::default()
            .with_list(ListKind::Country, CodeList::from_entries([("Sverige", entry("SE"))]))
            .with_list(ListKind::Unit, CodeList::from_entries([("Styck", entry("EA"))]))
    }

    #[test]
    fn dates_keep_the_part_before_the_first_space() {
        assert_eq!(date_part("2024-01-15 00:00:00"), "2024-01-15");
        assert_eq!(date_part("2024-01-15"), "2024-01-15");
    }

    #[test]
    fn split_drops_empty_segments() {
        assert_eq!(split_values("A;B;C").collect::<Vec<_>>(), ["A", "B", "C"]);
        assert_eq!(split_values("A;B;").collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(split_values(" A ; ;B").collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(split_values(";").count(), 0);
    }

    #[test]
    fn resolves_values() {
        let source = fields(&[
            ("DATE", "2024-03-01 00:00:00"),
            ("UNIT", "Styck"),
            ("ODD_UNIT", "Kartong"),
            ("COUNTRY_LONG", "Sverige"),
            ("COUNTRY_SHORT", "NO"),
            ("FLAG", "Nej"),
        ]);
        let lists = lists();
        let r = Resolver::new(&source, &lists, Some("SEK"));
        let value = |v: Value| r.value(&v).unwrap();

        assert_eq!(value(Value::Date("DATE")).as_deref(), Some("2024-03-01"));
        assert_eq!(
            value(Value::Code {
                field: "UNIT",
                list: ListKind::Unit,
                column: CodeColumn::Code
            })
            .as_deref(),
            Some("EA")
        );
        assert_eq!(
            value(Value::Code {
                field: "ODD_UNIT",
                list: ListKind::Unit,
                column: CodeColumn::Code
            }),
            None
        );
        assert_eq!(value(Value::Country("COUNTRY_LONG")).as_deref(), Some("SE"));
        assert_eq!(value(Value::Country("COUNTRY_SHORT")).as_deref(), Some("NO"));
        assert_eq!(value(Value::Currency).as_deref(), Some("SEK"));
        assert_eq!(value(Value::Const("  ")), None);
        assert_eq!(value(Value::Field("BLANK")), None);
    }

    #[test]
    fn flags_always_yield_text() {
        let source = fields(&[("FLAG", "NEJ")]);
        let lists = CodeLists::default();
        let r = Resolver::new(&source, &lists, None);
        let flag = |field| Value::Flag {
            field,
            token: "nej",
            matched: "false",
            otherwise: "true",
        };
        assert_eq!(r.value(&flag("FLAG")).unwrap().as_deref(), Some("false"));
        assert_eq!(r.value(&flag("BLANK")).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn conditions() {
        let source = fields(&[("A", "x"), ("CONTRACTED", "JA")]);
        let lists = CodeLists::default();
        let r = Resolver::new(&source, &lists, None);
        assert!(r.holds(&When::Always).unwrap());
        assert!(r.holds(&When::Present("A")).unwrap());
        assert!(!r.holds(&When::Present("B")).unwrap());
        assert!(r.holds(&When::AnyPresent(&["B", "A"])).unwrap());
        assert!(!r.holds(&When::AnyPresent(&["B", "C"])).unwrap());
        assert!(r.holds(&When::Equals("CONTRACTED", "ja")).unwrap());
        assert!(!r.holds(&When::Equals("A", "ja")).unwrap());
    }

    #[test]
    fn resolving_conditions_follow_the_lookup() {
        let source = fields(&[("UNIT", "Styck"), ("ODD_UNIT", "Kartong")]);
        let lists = lists();
        let r = Resolver::new(&source, &lists, None);
        let unit = |field| {
            When::Resolves(Value::Code {
                field,
                list: ListKind::Unit,
                column: CodeColumn::Code,
            })
        };
        assert!(r.holds(&unit("UNIT")).unwrap());
        assert!(!r.holds(&unit("ODD_UNIT")).unwrap());
        assert!(!r.holds(&unit("BLANK")).unwrap());
    }
}
