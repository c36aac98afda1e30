//! Whole-library decode must never panic or loop — every malformed
//! input has to surface as a structured `DecodeError`.

#![no_main]

use libfuzzer_sys::fuzz_target;

use olb_decoder::OlbDecoder;

fuzz_target!(|data: &[u8]| {
    let _ = OlbDecoder::decode(data);
});
