//! Running counters for a complexity monitor
//!
//! Counts are cumulative across resets; `reset()` only clears the window.

use serde::Serialize;

/// Counters maintained by `ComplexityMonitor`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonitorStats {
    /// Number of `ingest`/`assess` calls
    pub chunks: u64,
    /// Total bits delivered across all chunks
    pub bits: u64,
    /// Synthesizer invocations (full-window evaluations)
    pub evaluations: u64,
    /// Evaluations that returned `Suspicious`
    pub suspicious: u64,
    /// Computation faults that failed open
    pub faults: u64,
    /// Number of `reset` calls
    pub resets: u64,
}

impl MonitorStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of evaluations flagged as suspicious
    pub fn suspicious_rate(&self) -> f64 {
        if self.evaluations == 0 {
            return 0.0;
        }
        self.suspicious as f64 / self.evaluations as f64
    }

    /// Print summary to stderr
    pub fn print_summary(&self) {
        eprintln!("{}", self.to_summary_string());
    }

    pub fn to_summary_string(&self) -> String {
        let mut summary = String::from("=== Linear Complexity Summary ===\n");
        summary.push_str(&format!("Chunks ingested: {}\n", self.chunks));
        summary.push_str(&format!("Bits ingested:   {}\n", self.bits));
        summary.push_str(&format!("Evaluations:     {}\n", self.evaluations));
        summary.push_str(&format!(
            "Suspicious:      {} ({:.1}%)\n",
            self.suspicious,
            self.suspicious_rate() * 100.0
        ));
        if self.faults > 0 {
            summary.push_str(&format!("Faults (failed open): {}\n", self.faults));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suspicious_rate_without_evaluations() {
        assert_eq!(MonitorStats::new().suspicious_rate(), 0.0);
    }

    #[test]
    fn test_summary_string() {
        let stats = MonitorStats {
            chunks: 4,
            bits: 80,
            evaluations: 2,
            suspicious: 1,
            faults: 0,
            resets: 0,
        };
        let summary = stats.to_summary_string();
        assert!(summary.contains("Evaluations:     2"));
        assert!(summary.contains("(50.0%)"));
        assert!(!summary.contains("Faults"));
    }
}
