#![no_main]
use libfuzzer_sys::fuzz_target;
use url_canon::{normalize, normalize_bytes, Normalizer};

fuzz_target!(|data: &[u8]| {
    let s = normalize_bytes(data);

    let Ok(data) = std::str::from_utf8(data) else {
        return;
    };
    assert_eq!(normalize(data), s);

    // With entity decoding off and the pass limit lifted, normalizing
    // never lengthens the input.
    let t = Normalizer::new()
        .decode_html_entities(false)
        .max_passes(usize::MAX)
        .normalize(data);
    assert!(t.len() <= data.len() + 2, "{data:?} -> {t:?}");
});
