//! Peppol BIS Catalogue 3 output.
//!
//! Reads an SFTI catalogue workbook and writes one UBL `Catalogue` document:
//! the header fields first, then one `cac:CatalogueLine` per data row of the
//! `CatalogueLines` sheet.
//!
//! ```no_run
//! use katalog::catalogue::{ConvertOptions, convert_file};
//! use katalog::TemplateConfig;
//!
//! let config = TemplateConfig::bundled()?;
//! let xml = convert_file("catalogue.xlsx", &config, &ConvertOptions::default())?;
//! std::fs::write("catalogue.xml", xml)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assemble;
pub mod fields;
pub mod resolve;
pub mod rules;
pub mod xml_utils;

use std::path::Path;

use tracing::info;

use crate::core::{
    CodeLists, HEADER_SHEET, LINES_SHEET, Result, TemplateConfig, Workbook, validate_template,
};

use self::resolve::{FieldSource, HeaderFields, Resolver};
use self::rules::{HEADER, LINE, referenced_fields};
use self::xml_utils::XmlWriter;

/// `cbc:CustomizationID` of every catalogue.
pub const CUSTOMIZATION_ID: &str = "urn:fdc:peppol.eu:poacc:trns:catalogue:3";
/// `cbc:ProfileID` of every catalogue.
pub const PROFILE_ID: &str = "urn:fdc:peppol.eu:poacc:bis:catalogue_wo_response:3";
/// `schemeID` of standard item identifications (GTIN).
pub const GTIN_SCHEME: &str = "0160";
/// Document reference written into every certificate.
pub const CERTIFICATE_QUALIFIER: &str = "GS1SWEDENT0142";

/// UBL namespaces.
pub mod ns {
    pub const CATALOGUE: &str = "urn:oasis:names:specification:ubl:schema:xsd:Catalogue-2";
    pub const CAC: &str =
        "urn:oasis:names:specification:ubl:schema:xsd:CommonAggregateComponents-2";
    pub const CBC: &str = "urn:oasis:names:specification:ubl:schema:xsd:CommonBasicComponents-2";
}

/// Per-conversion options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Stop after this many catalogue lines. `None` converts every line.
    pub max_line_items: Option<usize>,
}

impl ConvertOptions {
    pub fn with_max_line_items(max: usize) -> Self {
        Self {
            max_line_items: Some(max),
        }
    }
}

/// Convert the workbook at `path`.
pub fn convert_file(
    path: impl AsRef<Path>,
    config: &TemplateConfig,
    options: &ConvertOptions,
) -> Result<String> {
    let workbook = Workbook::open(path)?;
    to_catalogue_xml(&workbook, config, options)
}

/// Convert a workbook held in memory.
pub fn convert_bytes(
    bytes: &[u8],
    config: &TemplateConfig,
    options: &ConvertOptions,
) -> Result<String> {
    let workbook = Workbook::from_bytes(bytes)?;
    to_catalogue_xml(&workbook, config, options)
}

/// Convert a loaded workbook into a Catalogue document.
///
/// The template shape is checked first, then every field the layout reads is
/// checked against `config`, so a bad template or configuration fails before
/// any XML is produced. The same inputs always give byte-identical output.
pub fn to_catalogue_xml(
    workbook: &Workbook,
    config: &TemplateConfig,
    options: &ConvertOptions,
) -> Result<String> {
    let mut w = XmlWriter::new()?;
    write_catalogue(&mut w, workbook, config, options)?;
    w.into_string()
}

/// Write the `Catalogue` element into `w`. Returns the number of lines written.
pub(crate) fn write_catalogue(
    w: &mut XmlWriter,
    workbook: &Workbook,
    config: &TemplateConfig,
    options: &ConvertOptions,
) -> Result<usize> {
    validate_template(workbook)?;
    check_config(config)?;
    let lists = CodeLists::load(workbook, config)?;

    let header = HeaderFields::new(workbook.required_sheet(HEADER_SHEET)?, config);
    let currency = header.field(fields::CURRENCY_ID)?;
    let id = header.field(fields::CATALOGUE_ID)?;
    info!(
        catalogue = id.as_deref().unwrap_or_default(),
        max_line_items = ?options.max_line_items,
        "converting catalogue"
    );

    w.start_element_with_attrs(
        "Catalogue",
        &[
            ("xmlns", ns::CATALOGUE),
            ("xmlns:cac", ns::CAC),
            ("xmlns:cbc", ns::CBC),
        ],
    )?;
    assemble::write_nodes(w, &Resolver::new(&header, &lists, currency.as_deref()), HEADER)?;
    let lines = assemble::write_lines(
        w,
        workbook.required_sheet(LINES_SHEET)?,
        config,
        &lists,
        currency.as_deref(),
        options,
    )?;
    w.end_element("Catalogue")?;

    info!(lines, "catalogue written");
    Ok(lines)
}

/// Every field the layout reads must have a configured location.
fn check_config(config: &TemplateConfig) -> Result<()> {
    let mut header = referenced_fields(HEADER);
    header.insert(fields::CURRENCY_ID);
    config.ensure_fields(header, referenced_fields(LINE))
}
