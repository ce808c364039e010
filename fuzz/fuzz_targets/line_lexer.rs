#![no_main]

use libfuzzer_sys::fuzz_target;
use stguard_syntax::source_lines;

const MAX_SOURCE_BYTES: usize = 4096;

fuzz_target!(|data: &[u8]| {
    let capped = &data[..data.len().min(MAX_SOURCE_BYTES)];
    let source = String::from_utf8_lossy(capped);
    for line in source_lines(&source) {
        let mut end = 0;
        for token in line.tokens() {
            assert_eq!(u32::from(token.range.start()), end, "tokens must tile the line");
            end = u32::from(token.range.end());
            let _ = line.text(token);
            assert!(line.column(token) >= 1);
        }
        assert_eq!(end as usize, line.raw().len());
    }
});
