use crate::bits::Bit;
use crate::synthesis::polynomial::ConnectionPolynomial;
use serde::Serialize;

/// Result of LFSR synthesis for one sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Synthesis {
    /// Minimal connection polynomial, c0 = 1, length L + 1
    pub polynomial: ConnectionPolynomial,

    /// Linear complexity L (degree of the connection polynomial)
    pub linear_complexity: usize,

    /// Number of bits the polynomial was synthesized from
    pub sequence_len: usize,
}

impl Synthesis {
    /// Complexity ratio L / n, in [0, 1]
    ///
    /// The empty sequence has ratio 0.0.
    pub fn ratio(&self) -> f64 {
        if self.sequence_len == 0 {
            return 0.0;
        }
        self.linear_complexity as f64 / self.sequence_len as f64
    }

    /// Split into `(coefficients, linear_complexity)`
    pub fn into_parts(self) -> (Vec<Bit>, usize) {
        (self.polynomial.into_coefficients(), self.linear_complexity)
    }
}

/// Synthesize the shortest LFSR generating `sequence` (Berlekamp-Massey over GF(2))
///
/// Total over all finite inputs: the empty sequence yields L = 0 and the
/// constant polynomial `[1]`. Runs in O(n²) time and O(n) space.
///
/// # Example
/// ```
/// use lfsr_sentinel::bits::parse_bit_string;
/// use lfsr_sentinel::synthesis::synthesize;
///
/// // PRBS-9 generated by x^9 + x^5 + 1
/// let bits = parse_bit_string("0000100011000010011").unwrap();
/// let synthesis = synthesize(&bits);
///
/// assert_eq!(synthesis.linear_complexity, 9);
/// assert_eq!(synthesis.polynomial.to_string(), "x^9 + x^5 + 1");
/// ```
pub fn synthesize(sequence: &[Bit]) -> Synthesis {
    let (coefficients, linear_complexity) = run(sequence, |_| {});

    Synthesis {
        polynomial: ConnectionPolynomial::from_synthesis(coefficients),
        linear_complexity,
        sequence_len: sequence.len(),
    }
}

/// Linear complexity of every prefix of `sequence`
///
/// `profile[i]` is the linear complexity of `sequence[..=i]`. The profile of a
/// random sequence tracks the line i/2 closely; long flat runs mark the
/// predictable stretches.
pub fn linear_complexity_profile(sequence: &[Bit]) -> Vec<usize> {
    let mut profile = Vec::with_capacity(sequence.len());
    run(sequence, |l| profile.push(l));
    profile
}

/// Single Berlekamp-Massey pass, reporting L after every position
fn run(sequence: &[Bit], mut on_step: impl FnMut(usize)) -> (Vec<Bit>, usize) {
    let n = sequence.len();

    // Padded to n + 1 so c[j + m] and b[j] never go out of range
    let mut c = vec![Bit::Zero; n + 1];
    let mut b = vec![Bit::Zero; n + 1];
    c[0] = Bit::One;
    b[0] = Bit::One;

    let mut l = 0usize;
    // Steps since the last length change
    let mut m = 1usize;

    for (i, &bit) in sequence.iter().enumerate() {
        let discrepancy = (1..=l).fold(bit, |acc, j| acc ^ (c[j] & sequence[i - j]));

        if discrepancy.is_zero() {
            m += 1;
        } else if 2 * l <= i {
            let previous = c.clone();
            apply_correction(&mut c, &b, m);
            l = i + 1 - l;
            b = previous;
            m = 1;
        } else {
            apply_correction(&mut c, &b, m);
            m += 1;
        }

        on_step(l);
    }

    c.truncate(l + 1);
    (c, l)
}

/// c(x) += x^m * b(x)
///
/// m never exceeds i + 1 <= n, so the shifted range stays inside the padding.
fn apply_correction(c: &mut [Bit], b: &[Bit], m: usize) {
    for (cj, &bj) in c[m..].iter_mut().zip(b) {
        *cj ^= bj;
    }
}
