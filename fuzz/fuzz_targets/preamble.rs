#![no_main]

use libfuzzer_sys::fuzz_target;

use olb_wire::{Cursor, Preamble};

fuzz_target!(|data: &[u8]| {
    let mut cursor = Cursor::new(data);
    let _ = Preamble::read(&mut cursor);
});
