//! Convert an SFTI catalogue workbook to Peppol BIS Catalogue 3 XML.
//!
//! ```text
//! cargo run --example convert_catalogue -- catalogue.xlsx [max-lines] [layout.toml]
//! ```

use katalog::catalogue::{ConvertOptions, convert_file};
use katalog::{KatalogError, TemplateConfig};

fn main() {
    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("usage: convert_catalogue <workbook> [max-lines] [layout.toml]");
        std::process::exit(2);
    };
    // Anything that is not a number means "no limit".
    let options = ConvertOptions {
        max_line_items: args.next().and_then(|n| n.parse().ok()),
    };
    let config = match args.next() {
        Some(path) => TemplateConfig::load(path),
        None => TemplateConfig::bundled(),
    };

    match config.and_then(|config| convert_file(&input, &config, &options)) {
        Ok(xml) => println!("{xml}"),
        Err(KatalogError::TemplateShape(msg)) => {
            eprintln!("{input} is not an SFTI catalogue template: {msg}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
