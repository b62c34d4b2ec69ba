#![no_main]

use katalog::TemplateConfig;
use katalog::catalogue::{ConvertOptions, convert_bytes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(config) = TemplateConfig::bundled() else {
        return;
    };
    // Must not panic; errors are fine.
    let _ = convert_bytes(data, &config, &ConvertOptions::with_max_line_items(50));
});
