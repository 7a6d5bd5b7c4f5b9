// Reference-vector tests for LFSR synthesis
//
// Vectors come from known maximal-length generators (PRBS-9, PRBS-11) and the
// textbook 16-tap example, so a wrong tie-break or shift shows up as a wrong
// polynomial rather than only a wrong length.

use super::*;
use crate::bits::{parse_bit_string, periodic, random_bits, Bit};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bits(s: &str) -> Vec<Bit> {
    parse_bit_string(s).unwrap()
}

#[test]
fn test_prbs9() {
    let synthesis = synthesize(&bits("0000100011000010011"));
    assert_eq!(synthesis.linear_complexity, 9);
    assert_eq!(synthesis.polynomial.to_string(), "x^9 + x^5 + 1");
}

#[test]
fn test_prbs11() {
    let synthesis = synthesize(&bits("00000000101000000100010"));
    assert_eq!(synthesis.linear_complexity, 11);
    assert_eq!(synthesis.polynomial.to_string(), "x^11 + x^9 + 1");
}

#[test]
fn test_sixteen_bit_register() {
    let synthesis = synthesize(&bits("01000100111000101110110000100011"));
    assert_eq!(synthesis.linear_complexity, 16);
    assert_eq!(
        synthesis.polynomial.to_string(),
        "x^16 + x^14 + x^13 + x^11 + 1"
    );
}

#[test]
fn test_all_zero_sequences() {
    for n in [0, 1, 7, 64, 200] {
        let synthesis = synthesize(&vec![Bit::Zero; n]);
        assert_eq!(synthesis.linear_complexity, 0, "n = {}", n);
        assert_eq!(synthesis.polynomial.coefficients(), &[Bit::One]);
    }
}

#[test]
fn test_all_ones_sequence() {
    let synthesis = synthesize(&vec![Bit::One; 50]);
    assert_eq!(synthesis.linear_complexity, 1);
    assert_eq!(synthesis.polynomial.to_string(), "x + 1");
}

#[test]
fn test_alternating_pattern_has_complexity_two() {
    let seq = periodic(&[Bit::One, Bit::Zero], 50);
    let synthesis = synthesize(&seq);
    assert_eq!(synthesis.linear_complexity, 2);
    assert_eq!(synthesis.polynomial.to_string(), "x^2 + 1");
    assert!(synthesis.ratio() < 0.1);
}

#[test]
fn test_periodic_sequences_bounded_by_period() {
    let patterns = ["110", "0010111", "1101000110", "1", "01"];
    for pattern in patterns {
        let pattern = bits(pattern);
        let k = pattern.len();
        for repeats in 2..6 {
            let seq = periodic(&pattern, k * repeats);
            let synthesis = synthesize(&seq);
            assert!(
                synthesis.linear_complexity <= k,
                "period {} gave L = {}",
                k,
                synthesis.linear_complexity
            );
        }
    }
}

#[test]
fn test_polynomial_generates_the_sequence() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for len in [1, 2, 13, 64, 100] {
        let seq = random_bits(&mut rng, len);
        let synthesis = synthesize(&seq);
        let l = synthesis.linear_complexity;

        assert!(l <= len);
        assert_eq!(synthesis.polynomial.degree(), l);
        assert!(synthesis.polynomial.is_satisfied_by(&seq));

        // Running the LFSR from the first L bits reproduces the rest
        let regenerated = synthesis.polynomial.extend(&seq[..l], len - l).unwrap();
        assert_eq!(regenerated, seq[l..].to_vec());
    }
}

#[test]
fn test_random_sequences_concentrate_near_half() {
    // E[L] = n/2 + O(1) for uniformly random bits
    let mut rng = StdRng::seed_from_u64(42);
    let trials = 200;
    let n = 100;

    let total: f64 = (0..trials)
        .map(|_| synthesize(&random_bits(&mut rng, n)).ratio())
        .sum();
    let mean = total / trials as f64;

    assert!((0.45..0.55).contains(&mean), "mean ratio {}", mean);
}

#[test]
fn test_profile_final_value_matches_synthesis() {
    let mut rng = StdRng::seed_from_u64(9);
    let seq = random_bits(&mut rng, 80);
    let profile = linear_complexity_profile(&seq);

    assert_eq!(profile.len(), 80);
    assert_eq!(*profile.last().unwrap(), synthesize(&seq).linear_complexity);
    // Profile is non-decreasing
    assert!(profile.windows(2).all(|w| w[0] <= w[1]));
}
