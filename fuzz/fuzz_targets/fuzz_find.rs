#![no_main]

use libfuzzer_sys::fuzz_target;
use u8p::{find, find_with, is_lead_byte, FindPolicy, U8pError};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First two bytes select the offset, the rest is the buffer
    let offset = u16::from_le_bytes([data[0], data[1]]) as usize;
    let buf = &data[2..];

    match find(buf, offset) {
        Ok(index) if buf.is_empty() => assert_eq!(index, 0),
        Ok(index) => {
            assert!(offset - 4 <= index && index < offset);
            assert!(is_lead_byte(buf[index]));
        }
        Err(U8pError::InvalidOffset) => assert!(offset <= 3 || buf.len() <= offset),
        Err(U8pError::InvalidEncoding) => {
            assert!(buf[offset - 4..offset].iter().all(|&b| !is_lead_byte(b)));
        }
        Err(U8pError::InvalidLength) => unreachable!(),
    }

    let _ = find_with(buf, offset, FindPolicy::Strict);

    // Valid text must always produce a boundary
    if let Ok(s) = core::str::from_utf8(buf) {
        if offset > 3 && offset < s.len() {
            let index = find(buf, offset).unwrap();
            assert!(s.is_char_boundary(index));
        }
    }
});
