//! JSON output format for complexity analysis
//!
//! `--format json` emits a single document with the effective configuration,
//! one entry per chunk and the final counters.

use crate::analyzer::{AnalysisReport, ChunkResult};
use crate::monitor::{MonitorConfig, Outcome, Verdict};
use crate::stats::MonitorStats;
use serde::Serialize;

/// A single chunk entry
#[derive(Debug, Clone, Serialize)]
pub struct JsonChunk {
    /// 1-based chunk number
    pub index: usize,
    /// Stream offset of the first bit
    pub start_bit: usize,
    /// Number of bits in the chunk
    pub len: usize,
    pub verdict: Verdict,
    /// Linear complexity (only when the window was evaluated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linear_complexity: Option<usize>,
    /// Complexity ratio L / capacity (only when evaluated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    /// Connection polynomial coefficients c0..cL (only when evaluated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polynomial: Option<Vec<u8>>,
    /// Fault description when the verdict failed open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}

impl From<&ChunkResult> for JsonChunk {
    fn from(chunk: &ChunkResult) -> Self {
        let mut json = JsonChunk {
            index: chunk.index,
            start_bit: chunk.start_bit,
            len: chunk.len,
            verdict: chunk.assessment.verdict,
            linear_complexity: None,
            ratio: None,
            polynomial: None,
            fault: None,
        };

        match &chunk.assessment.outcome {
            Outcome::InsufficientData { .. } => {}
            Outcome::Evaluated {
                linear_complexity,
                ratio,
                polynomial,
            } => {
                json.linear_complexity = Some(*linear_complexity);
                json.ratio = Some(*ratio);
                json.polynomial = Some(
                    polynomial
                        .coefficients()
                        .iter()
                        .map(|&c| u8::from(c))
                        .collect(),
                );
            }
            Outcome::Fault { reason } => json.fault = Some(reason.clone()),
        }

        json
    }
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    pub version: String,
    pub config: MonitorConfig,
    pub chunks: Vec<JsonChunk>,
    pub stats: MonitorStats,
}

impl JsonOutput {
    pub fn from_report(report: &AnalysisReport) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            config: report.config,
            chunks: report.chunks.iter().map(JsonChunk::from).collect(),
            stats: report.stats.clone(),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
