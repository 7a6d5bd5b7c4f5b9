use crate::bits::Bit;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    #[error("connection polynomial has no coefficients")]
    Empty,

    #[error("connection polynomial must have c0 = 1")]
    LeadingZero,
}

/// Connection polynomial C(x) = 1 + c1*x + ... + cL*x^L over GF(2)
///
/// A sequence s satisfies C when, for every i >= L,
/// s[i] = c1*s[i-1] + c2*s[i-2] + ... + cL*s[i-L].
///
/// The coefficient vector always has c0 = 1. Its length is L + 1, where L is
/// the register length; cL may be zero (e.g. `1000000` has L = 1, C = 1).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPolynomial")]
pub struct ConnectionPolynomial {
    coefficients: Vec<Bit>,
}

/// Unchecked wire form, validated on the way in
#[derive(Deserialize)]
struct RawPolynomial {
    coefficients: Vec<Bit>,
}

impl TryFrom<RawPolynomial> for ConnectionPolynomial {
    type Error = PolynomialError;

    fn try_from(raw: RawPolynomial) -> Result<Self, Self::Error> {
        Self::try_from(raw.coefficients)
    }
}

impl TryFrom<Vec<Bit>> for ConnectionPolynomial {
    type Error = PolynomialError;

    fn try_from(coefficients: Vec<Bit>) -> Result<Self, Self::Error> {
        match coefficients.first() {
            None => Err(PolynomialError::Empty),
            Some(Bit::Zero) => Err(PolynomialError::LeadingZero),
            Some(Bit::One) => Ok(Self { coefficients }),
        }
    }
}

impl ConnectionPolynomial {
    /// The constant polynomial `[1]` (L = 0)
    pub fn one() -> Self {
        Self {
            coefficients: vec![Bit::One],
        }
    }

    /// Build from coefficients `[c0, c1, ..., cL]`
    ///
    /// Returns `None` unless the vector is non-empty and c0 = 1.
    pub fn from_coefficients(coefficients: Vec<Bit>) -> Option<Self> {
        Self::try_from(coefficients).ok()
    }

    pub(crate) fn from_synthesis(coefficients: Vec<Bit>) -> Self {
        debug_assert_eq!(coefficients.first(), Some(&Bit::One));
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[Bit] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<Bit> {
        self.coefficients
    }

    /// Register length L (number of coefficients minus one)
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Indices j >= 1 with cj = 1
    pub fn taps(&self) -> impl Iterator<Item = usize> + '_ {
        self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, c)| c.is_one())
            .map(|(j, _)| j)
    }

    /// Predict the bit that follows `history`
    ///
    /// Returns `None` if `history` is shorter than the register.
    pub fn next_bit(&self, history: &[Bit]) -> Option<Bit> {
        let n = history.len();
        if n < self.degree() {
            return None;
        }
        Some(self.taps().fold(Bit::Zero, |acc, j| acc ^ history[n - j]))
    }

    /// Check the recurrence for every index i >= L
    pub fn is_satisfied_by(&self, sequence: &[Bit]) -> bool {
        (self.degree()..sequence.len())
            .all(|i| self.next_bit(&sequence[..i]) == Some(sequence[i]))
    }

    /// Run the LFSR forward, producing the `count` bits that follow `seed`
    pub fn extend(&self, seed: &[Bit], count: usize) -> Option<Vec<Bit>> {
        if seed.len() < self.degree() {
            return None;
        }

        let mut state = seed.to_vec();
        for _ in 0..count {
            let bit = self.next_bit(&state)?;
            state.push(bit);
        }
        Some(state.split_off(seed.len()))
    }
}

impl Default for ConnectionPolynomial {
    fn default() -> Self {
        Self::one()
    }
}

impl fmt::Display for ConnectionPolynomial {
    /// Highest power first, e.g. `x^16 + x^14 + x^13 + x^11 + 1`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms: Vec<String> = self
            .taps()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .map(|j| if j == 1 { "x".to_string() } else { format!("x^{}", j) })
            .collect();
        terms.push("1".to_string());
        write!(f, "{}", terms.join(" + "))
    }
}
