#![no_main]
use config_metadata_diff::{parse_metadata_str, DiffEngine};
use libfuzzer_sys::fuzz_target;

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Fuzz property entries inside a well-formed document envelope, then diff
/// the result against itself and an empty snapshot.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if s.len() >= MAX_WRAPPED_INPUT_LEN {
            return;
        }
        let wrapped = format!(r#"{{"groups":[{{"id":"fuzz"}}],"properties":[{s}]}}"#);
        if let Ok(snapshot) = parse_metadata_str(&wrapped) {
            let engine = DiffEngine::new();
            let _ = engine.diff(&snapshot, &snapshot);
            let _ = engine.diff(&Default::default(), &snapshot);
        }
    }
});
