//! Zero-terminated string reads across arbitrary buffers: every success
//! must advance the cursor, and every failure must be a clean error.

#![no_main]

use libfuzzer_sys::fuzz_target;

use olb_wire::Cursor;

fuzz_target!(|data: &[u8]| {
    let mut cursor = Cursor::new(data);
    while !cursor.at_end() {
        if cursor.read_string_zero_term().is_err() {
            break;
        }
    }
});
