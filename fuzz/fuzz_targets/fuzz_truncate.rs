#![no_main]

use libfuzzer_sys::fuzz_target;
use u8p::{from_utf8, truncate, truncate_str, truncate_utf8};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let offset = data[0] as usize;
    let buf = &data[1..];

    let _ = truncate(buf, offset);

    if let Ok(prefix) = truncate_utf8(buf, offset) {
        assert!(buf.starts_with(prefix.as_bytes()));
    }

    if let Some(s) = from_utf8(buf) {
        if let Ok(prefix) = truncate_str(s, offset) {
            assert!(from_utf8(prefix.as_bytes()).is_some());
        }
    }
});
