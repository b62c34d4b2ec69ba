#![no_main]

use katalog::TemplateConfig;
use katalog::reference::{CellRef, ColumnRange};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = TemplateConfig::from_toml_str(s);
        let _ = s.parse::<CellRef>();
        let _ = s.parse::<ColumnRange>();
    }
});
