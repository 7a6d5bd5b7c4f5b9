// Sliding-Window Linear Complexity Monitor
//
// Keeps the most recent `capacity` bits of a stream and, once the window is
// full, synthesizes its shortest LFSR. A complexity ratio L / capacity below
// the configured threshold flags the window as suspicious: replayed or
// generated traffic is far more predictable than genuine entropy.
//
// Scientific Foundation:
// [1] Massey, J. L. (1969). Shift-register synthesis and BCH decoding.
//     IEEE Transactions on Information Theory, 15(1), 122-127.
//
// Failure policy: computation faults fail OPEN (verdict Normal) and are
// reported at ERROR level through the record sink. A detector malfunction must
// never surface as a detection.
//
// One monitor per stream. The window is not shared across threads.

mod config;
mod estimator;
pub mod sink;
mod verdict;
mod window;

pub use config::{ConfigError, MonitorConfig};
pub use estimator::{BerlekampMassey, ComplexityEstimator, ComputationFault};
pub use sink::{LogRecord, MemorySink, RecordLevel, RecordSink, TracingSink, WriterSink};
pub use verdict::{ComplexityAssessment, Outcome, Verdict};
pub use window::SlidingWindow;

use crate::bits::Bit;
use crate::stats::MonitorStats;
use crate::synthesis::Synthesis;
use estimator::check_invariants;

/// Linear complexity monitor over a sliding window of bits
///
/// # Example
/// ```
/// use lfsr_sentinel::bits::{periodic, Bit};
/// use lfsr_sentinel::monitor::{ComplexityMonitor, MonitorConfig, Verdict};
///
/// let config = MonitorConfig::new(50, 0.7).unwrap();
/// let mut monitor = ComplexityMonitor::new(config).unwrap();
///
/// // Not enough data yet
/// assert_eq!(monitor.ingest(&[Bit::One; 10]), Verdict::Normal);
///
/// // Period-2 traffic has linear complexity 2
/// let pattern = periodic(&[Bit::One, Bit::Zero], 50);
/// assert_eq!(monitor.ingest(&pattern), Verdict::Suspicious);
/// ```
pub struct ComplexityMonitor<E = BerlekampMassey, S = TracingSink> {
    config: MonitorConfig,
    window: SlidingWindow,
    estimator: E,
    sink: S,
    stats: MonitorStats,
}

impl ComplexityMonitor {
    /// Monitor with Berlekamp-Massey synthesis, logging through `tracing`
    pub fn new(config: MonitorConfig) -> Result<Self, ConfigError> {
        Self::with_parts(config, BerlekampMassey, TracingSink)
    }
}

impl<S: RecordSink> ComplexityMonitor<BerlekampMassey, S> {
    /// Monitor with Berlekamp-Massey synthesis and a custom record sink
    pub fn with_sink(config: MonitorConfig, sink: S) -> Result<Self, ConfigError> {
        Self::with_parts(config, BerlekampMassey, sink)
    }
}

impl<E: ComplexityEstimator, S: RecordSink> ComplexityMonitor<E, S> {
    pub fn with_parts(config: MonitorConfig, estimator: E, sink: S) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            window: SlidingWindow::new(config.capacity),
            estimator,
            sink,
            stats: MonitorStats::new(),
        })
    }

    /// Append `chunk` and return the verdict for the resulting window
    pub fn ingest(&mut self, chunk: &[Bit]) -> Verdict {
        self.assess(chunk).verdict
    }

    /// Append `chunk` and return the detailed assessment
    ///
    /// Never fails: below capacity the verdict is `Normal` without synthesis,
    /// and computation faults fail open to `Normal`.
    pub fn assess(&mut self, chunk: &[Bit]) -> ComplexityAssessment {
        self.stats.chunks += 1;
        self.stats.bits += chunk.len() as u64;
        self.window.extend(chunk);

        let threshold = self.config.threshold;

        if !self.window.is_full() {
            let have = self.window.len();
            let need = self.config.capacity;
            self.emit(
                RecordLevel::Debug,
                format!("Insufficient data: {}/{} bits", have, need),
            );
            return ComplexityAssessment {
                verdict: Verdict::Normal,
                outcome: Outcome::InsufficientData { have, need },
                threshold,
            };
        }

        self.stats.evaluations += 1;

        match self.evaluate() {
            Ok(synthesis) => self.judge(synthesis),
            Err(fault) => {
                self.stats.faults += 1;
                self.emit(
                    RecordLevel::Error,
                    format!("Error during complexity analysis: {} (failing open)", fault),
                );
                ComplexityAssessment {
                    verdict: Verdict::Normal,
                    outcome: Outcome::Fault {
                        reason: fault.to_string(),
                    },
                    threshold,
                }
            }
        }
    }

    /// Clear the window; the next call behaves as on a fresh monitor
    pub fn reset(&mut self) {
        self.window.clear();
        self.stats.resets += 1;
        self.emit(RecordLevel::Info, "Monitor state reset");
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }

    pub fn stats(&self) -> &MonitorStats {
        &self.stats
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn evaluate(&mut self) -> Result<Synthesis, ComputationFault> {
        let window = self.window.as_slice();
        let synthesis = self.estimator.estimate(window)?;
        check_invariants(window.len(), &synthesis)?;
        Ok(synthesis)
    }

    fn judge(&mut self, synthesis: Synthesis) -> ComplexityAssessment {
        let threshold = self.config.threshold;
        let linear_complexity = synthesis.linear_complexity;
        let ratio = linear_complexity as f64 / self.config.capacity as f64;

        let verdict = if ratio < threshold {
            self.stats.suspicious += 1;
            self.emit(
                RecordLevel::Warning,
                format!(
                    "Low linear complexity detected! Complexity ratio: {:.4}, LFSR length: {}, \
                     connection polynomial: {}",
                    ratio,
                    linear_complexity,
                    format_coefficients(synthesis.polynomial.coefficients())
                ),
            );
            Verdict::Suspicious
        } else {
            self.emit(
                RecordLevel::Info,
                format!(
                    "Normal complexity. Complexity ratio: {:.4}, LFSR length: {}",
                    ratio, linear_complexity
                ),
            );
            Verdict::Normal
        };

        ComplexityAssessment {
            verdict,
            outcome: Outcome::Evaluated {
                linear_complexity,
                ratio,
                polynomial: synthesis.polynomial,
            },
            threshold,
        }
    }

    fn emit(&mut self, level: RecordLevel, message: impl Into<String>) {
        self.sink.emit(LogRecord::new(level, message));
    }
}

/// `[1, 0, 1]` style rendering of polynomial coefficients
fn format_coefficients(coefficients: &[Bit]) -> String {
    let items: Vec<String> = coefficients.iter().map(|c| c.to_string()).collect();
    format!("[{}]", items.join(", "))
}
