#![no_main]
use config_metadata_diff::parsers::read_metadata;
use libfuzzer_sys::fuzz_target;

const CHARSETS: [&str; 4] = ["UTF-8", "UTF-16", "ISO-8859-1", "US-ASCII"];

/// Fuzz the metadata reader with raw bytes in every supported charset.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let charset = CHARSETS[usize::from(selector) % CHARSETS.len()];
    let _ = read_metadata(rest, charset);
});
