// Shortest LFSR Synthesis over GF(2)
//
// This module computes the linear complexity of a finite bit sequence: the
// length of the shortest linear feedback shift register that generates it.
// Predictable traffic (replayed, periodic, algorithmically generated) has a
// short LFSR; genuine entropy needs an LFSR about half as long as the sequence.
//
// Scientific Foundation:
// [1] Massey, J. L. (1969). Shift-register synthesis and BCH decoding.
//     IEEE Transactions on Information Theory, 15(1), 122-127.
//
// [2] Rueppel, R. A. (1986). Analysis and Design of Stream Ciphers. Springer.
//     Expected linear complexity of a random n-bit sequence is n/2 + O(1).
//
// Key Insight: the synthesizer is a pure function. All loop state is local,
// so it can be tested in isolation from the monitor.

mod berlekamp_massey;
mod polynomial;

pub use berlekamp_massey::{linear_complexity_profile, synthesize, Synthesis};
pub use polynomial::{ConnectionPolynomial, PolynomialError};

#[cfg(test)]
mod tests;
