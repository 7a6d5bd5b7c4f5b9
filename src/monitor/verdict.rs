// Verdicts and per-call assessments for the complexity monitor

use crate::synthesis::ConnectionPolynomial;
use serde::Serialize;
use std::fmt;

/// Per-call result: suspicious (low complexity) or normal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Complexity at or above threshold, not enough data, or a fail-open fault
    Normal,

    /// Complexity ratio strictly below threshold
    Suspicious,
}

impl Verdict {
    pub fn is_suspicious(self) -> bool {
        self == Verdict::Suspicious
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict.is_suspicious()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Normal => f.write_str("NORMAL"),
            Verdict::Suspicious => f.write_str("SUSPICIOUS"),
        }
    }
}

/// What the monitor did to reach its verdict
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Window below capacity, no synthesis performed
    InsufficientData { have: usize, need: usize },

    /// Synthesis ran on the full window
    Evaluated {
        linear_complexity: usize,
        ratio: f64,
        polynomial: ConnectionPolynomial,
    },

    /// Computation fault, verdict failed open to `Normal`
    Fault { reason: String },
}

/// Detailed result of one `assess` call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplexityAssessment {
    /// Final verdict
    pub verdict: Verdict,

    /// How the verdict was reached
    pub outcome: Outcome,

    /// Threshold in force for this call
    pub threshold: f64,
}

impl ComplexityAssessment {
    pub fn is_evaluated(&self) -> bool {
        matches!(self.outcome, Outcome::Evaluated { .. })
    }

    pub fn linear_complexity(&self) -> Option<usize> {
        match self.outcome {
            Outcome::Evaluated {
                linear_complexity, ..
            } => Some(linear_complexity),
            _ => None,
        }
    }

    pub fn ratio(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Evaluated { ratio, .. } => Some(ratio),
            _ => None,
        }
    }

    /// Generate human-readable report
    pub fn to_report_string(&self) -> String {
        match &self.outcome {
            Outcome::InsufficientData { have, need } => {
                format!("⏳ INSUFFICIENT DATA ({}/{} bits)", have, need)
            }
            Outcome::Evaluated {
                linear_complexity,
                ratio,
                polynomial,
            } => {
                let mut report = match self.verdict {
                    Verdict::Suspicious => "❌ LOW COMPLEXITY DETECTED\n".to_string(),
                    Verdict::Normal => "✅ NORMAL COMPLEXITY\n".to_string(),
                };
                report.push_str(&format!(
                    "  Complexity ratio: {:.4} (threshold {})\n",
                    ratio, self.threshold
                ));
                report.push_str(&format!("  LFSR length: {}\n", linear_complexity));
                if self.verdict.is_suspicious() {
                    report.push_str(&format!("  Connection polynomial: {}\n", polynomial));
                }
                report
            }
            Outcome::Fault { reason } => {
                format!("⚠️  DETECTOR FAULT (verdict failed open)\n  Reason: {}\n", reason)
            }
        }
    }
}
