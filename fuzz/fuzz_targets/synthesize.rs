#![no_main]

use lfsr_sentinel::bits::unpack_bytes;
use lfsr_sentinel::synthesis::synthesize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Synthesis is total: any bit sequence must produce a valid register
    let bits = unpack_bytes(data);
    let synthesis = synthesize(&bits);

    assert!(synthesis.linear_complexity <= bits.len());
    assert_eq!(synthesis.polynomial.degree(), synthesis.linear_complexity);
    assert!(synthesis.polynomial.is_satisfied_by(&bits));
});
