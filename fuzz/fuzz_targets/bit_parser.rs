#![no_main]

use lfsr_sentinel::bits::{decode, InputFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding must never panic regardless of input
    let _ = decode(data, InputFormat::Bits);
    let _ = decode(data, InputFormat::Hex);
});
