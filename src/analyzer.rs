//! Stream analysis driver
//!
//! Feeds a sequence of chunks through one `ComplexityMonitor` and collects the
//! per-chunk assessments. Used by the CLI; the demo scenario lives here too.

use crate::bits::{periodic, random_bits, Bit};
use crate::monitor::{
    ComplexityAssessment, ComplexityMonitor, ConfigError, MonitorConfig, Outcome, RecordSink,
};
use crate::stats::MonitorStats;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::num::NonZeroUsize;

/// Assessment of one delivered chunk
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkResult {
    /// 1-based chunk number
    pub index: usize,
    /// Stream offset of the chunk's first bit
    pub start_bit: usize,
    /// Number of bits in the chunk
    pub len: usize,
    pub assessment: ComplexityAssessment,
}

impl ChunkResult {
    /// One-line text rendering
    pub fn to_line(&self) -> String {
        let end = self.start_bit + self.len;
        let detail = match &self.assessment.outcome {
            Outcome::InsufficientData { have, need } => {
                format!("insufficient data ({}/{} bits)", have, need)
            }
            Outcome::Evaluated {
                linear_complexity,
                ratio,
                polynomial,
            } => format!(
                "L={} ratio={:.4} polynomial={}",
                linear_complexity, ratio, polynomial
            ),
            Outcome::Fault { reason } => format!("fault: {}", reason),
        };
        format!(
            "chunk {} (bits {}..{}): {} - {}",
            self.index, self.start_bit, end, self.assessment.verdict, detail
        )
    }
}

/// Result of running a whole stream through a monitor
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub config: MonitorConfig,
    pub chunks: Vec<ChunkResult>,
    pub stats: MonitorStats,
}

impl AnalysisReport {
    pub fn suspicious_chunks(&self) -> impl Iterator<Item = &ChunkResult> {
        self.chunks
            .iter()
            .filter(|c| c.assessment.verdict.is_suspicious())
    }
}

/// Deliver `chunks` in order to a fresh monitor writing to `sink`
pub fn analyze_chunks<'a, I, S>(
    chunks: I,
    config: MonitorConfig,
    sink: S,
) -> Result<AnalysisReport, ConfigError>
where
    I: IntoIterator<Item = &'a [Bit]>,
    S: RecordSink,
{
    let mut monitor = ComplexityMonitor::with_sink(config, sink)?;
    let mut results = Vec::new();
    let mut offset = 0;

    for (i, chunk) in chunks.into_iter().enumerate() {
        let assessment = monitor.assess(chunk);
        results.push(ChunkResult {
            index: i + 1,
            start_bit: offset,
            len: chunk.len(),
            assessment,
        });
        offset += chunk.len();
    }

    tracing::debug!(
        "Analyzed {} chunks, {} evaluations",
        results.len(),
        monitor.stats().evaluations
    );

    Ok(AnalysisReport {
        config,
        chunks: results,
        stats: monitor.stats().clone(),
    })
}

/// Split `bits` into fixed-size chunks and analyze them
pub fn analyze<S: RecordSink>(
    bits: &[Bit],
    chunk_size: NonZeroUsize,
    config: MonitorConfig,
    sink: S,
) -> Result<AnalysisReport, ConfigError> {
    analyze_chunks(bits.chunks(chunk_size.get()), config, sink)
}

/// Monitor configuration of the demo scenario
pub fn demo_config() -> MonitorConfig {
    MonitorConfig {
        capacity: 50,
        threshold: 0.7,
    }
}

/// Demo scenario: 40 random bits, then `[1, 0, 1, 0]` repeated 10 times
pub fn demo_chunks(seed: u64) -> Vec<Vec<Bit>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = random_bits(&mut rng, 40);
    let attack = periodic(&[Bit::One, Bit::Zero, Bit::One, Bit::Zero], 40);
    vec![normal, attack]
}
