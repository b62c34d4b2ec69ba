//! # katalog
//!
//! Converts product catalogues kept in the SFTI catalogue spreadsheet
//! template into Peppol BIS Catalogue 3 (UBL 2.1 `Catalogue`) XML.
//!
//! The template has three sheets: `CatalogueHeader` (one cell per header
//! field), `CatalogueLines` (one row per product from row 3) and `CodeLists`
//! (label → code tables). Where each field lives is described by a
//! [`TemplateConfig`]; the layout of the published template ships with the
//! crate as [`TemplateConfig::bundled`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use katalog::catalogue::{self, ConvertOptions};
//! use katalog::TemplateConfig;
//!
//! let config = TemplateConfig::bundled()?;
//! let options = ConvertOptions::with_max_line_items(500);
//! let xml = catalogue::convert_file("SFTI_catalogue.xlsx", &config, &options)?;
//! assert!(xml.contains("<cbc:CustomizationID>urn:fdc:peppol.eu:poacc:trns:catalogue:3</cbc:CustomizationID>"));
//! # Ok::<(), katalog::KatalogError>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `sbdh` (default) | Standard Business Document Header envelope |
//! | `all` | Everything |

pub mod catalogue;
pub mod core;

#[cfg(feature = "sbdh")]
pub mod sbdh;

// Re-export core types at crate root for convenience
pub use crate::core::*;
