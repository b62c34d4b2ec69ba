//! Interpreting the rule tables into XML.

use tracing::debug;

use crate::core::{CodeLists, Result, Sheet, TemplateConfig};

use super::ConvertOptions;
use super::fields::LINE_ID;
use super::resolve::{FieldSource, LineRow, Resolver, split_values};
use super::rules::{LINE, Node};
use super::xml_utils::XmlWriter;

/// First row of `CatalogueLines` holding a line; rows 1 and 2 are headings.
pub const FIRST_LINE_ROW: u32 = 3;

/// A `LINE_ID` with this text (any case) excludes the row.
pub const SKIP_MARKER: &str = "x";

/// Write `nodes` in order, resolving every value through `resolver`.
pub fn write_nodes<S: FieldSource>(
    w: &mut XmlWriter,
    resolver: &Resolver<'_, S>,
    nodes: &[Node],
) -> Result<()> {
    for node in nodes {
        match *node {
            Node::Leaf {
                element,
                ref value,
                attrs,
            } => {
                let Some(text) = resolver.value(value)? else {
                    continue;
                };
                let mut resolved = Vec::with_capacity(attrs.len());
                for attr in attrs {
                    resolved.push((attr.name, resolver.value(&attr.value)?));
                }
                let attrs: Vec<(&str, Option<&str>)> =
                    resolved.iter().map(|(name, v)| (*name, v.as_deref())).collect();
                w.optional_element(element, Some(text.as_str()), &attrs)?;
            }
            Node::Group {
                element,
                ref when,
                children,
            } => {
                if resolver.holds(when)? {
                    w.start_element(element)?;
                    write_nodes(w, resolver, children)?;
                    w.end_element(element)?;
                }
            }
            Node::Split { element, field } => {
                let Some(raw) = resolver.field(field)? else {
                    continue;
                };
                for id in split_values(&raw) {
                    w.start_element(element)?;
                    w.text_element("cbc:ID", id)?;
                    w.end_element(element)?;
                }
            }
        }
    }
    Ok(())
}

/// Write one `cac:CatalogueLine` per data row of `sheet`.
///
/// Rows are read from row 3 until the first blank `LINE_ID`. Rows marked
/// with [`SKIP_MARKER`] are passed over and do not count toward
/// [`ConvertOptions::max_line_items`]. Returns the number of lines written.
pub fn write_lines(
    w: &mut XmlWriter,
    sheet: &Sheet,
    config: &TemplateConfig,
    lists: &CodeLists,
    currency: Option<&str>,
    options: &ConvertOptions,
) -> Result<usize> {
    let mut written = 0;
    for row in FIRST_LINE_ROW..=sheet.last_row() {
        let line = LineRow::new(sheet, config, row);
        let Some(id) = line.field(LINE_ID)? else {
            debug!(row, "blank line id, end of catalogue lines");
            break;
        };
        if id.eq_ignore_ascii_case(SKIP_MARKER) {
            debug!(row, "line marked for exclusion, skipping");
            continue;
        }
        if options.max_line_items.is_some_and(|max| written >= max) {
            debug!(row, written, "line limit reached");
            break;
        }

        w.start_element("cac:CatalogueLine")?;
        write_nodes(w, &Resolver::new(&line, lists, currency), LINE)?;
        w.end_element("cac:CatalogueLine")?;
        written += 1;
    }
    Ok(written)
}
