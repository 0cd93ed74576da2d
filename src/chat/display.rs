//! Mapping from agent query responses to display-ready stats.
//!
//! This is pure view derivation, not backend truth: confidence is a fixed
//! function of the evidence level, and the pipeline breakdown is an estimate
//! apportioned from the total round-trip time.

use crate::api::{AgentQueryResponse, AgentSource, EvidenceLevel};
use serde::Serialize;
use std::fmt;

/// Coarse category of a cited source document.
///
/// LAG = law, PROP = government bill, SOU = government inquiry report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SourceKind {
    Lag,
    Prop,
    Sou,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Lag => write!(f, "LAG"),
            SourceKind::Prop => write!(f, "PROP"),
            SourceKind::Sou => write!(f, "SOU"),
        }
    }
}

impl SourceKind {
    /// Normalize a backend doc_type into a source category.
    ///
    /// Matching is case-insensitive with surrounding whitespace ignored.
    /// Unrecognized or missing doc_types deliberately fall back to `Lag`;
    /// laws dominate the corpus, so that is the least surprising bucket for
    /// an unclassified citation.
    pub fn from_doc_type(doc_type: Option<&str>) -> Self {
        match doc_type.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("sfs") | Some("lag") => SourceKind::Lag,
            Some("prop") | Some("proposition") => SourceKind::Prop,
            Some("sou") => SourceKind::Sou,
            _ => SourceKind::Lag,
        }
    }
}

/// A cited source, mapped for display.
#[derive(Debug, Clone, Serialize)]
pub struct DisplaySource {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub relevance: f64,
}

impl From<&AgentSource> for DisplaySource {
    fn from(source: &AgentSource) -> Self {
        Self {
            id: source.id.clone(),
            title: source.title.clone(),
            kind: SourceKind::from_doc_type(source.doc_type.as_deref()),
            relevance: source.score,
        }
    }
}

/// Estimated per-stage timing, apportioned from the total round-trip time.
///
/// The backend reports only `total_time_ms`; the 10/80/10 split across
/// search/generation/verification is a display estimate, not a measurement.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineEstimate {
    pub search: String,
    pub gen: String,
    pub verify: String,
}

impl PipelineEstimate {
    pub fn from_total_ms(total_time_ms: u64) -> Self {
        let search = (total_time_ms as f64 * 0.10).round() as u64;
        let gen = (total_time_ms as f64 * 0.80).round() as u64;
        let verify = (total_time_ms as f64 * 0.10).round() as u64;
        Self {
            search: format_ms(search),
            gen: format_ms(gen),
            verify: format_ms(verify),
        }
    }
}

/// Derived stats shown next to an assistant answer.
#[derive(Debug, Clone, Serialize)]
pub struct RagDisplayStats {
    /// Total round-trip time, e.g. "1,234ms".
    pub latency: String,
    /// 0.0 to 1.0, derived from the evidence level.
    pub confidence: f64,
    pub sources: Vec<DisplaySource>,
    pub pipeline: PipelineEstimate,
}

impl From<&AgentQueryResponse> for RagDisplayStats {
    fn from(response: &AgentQueryResponse) -> Self {
        Self {
            latency: format_ms(response.total_time_ms),
            confidence: confidence_for(response.evidence_level),
            sources: response.sources.iter().map(DisplaySource::from).collect(),
            pipeline: PipelineEstimate::from_total_ms(response.total_time_ms),
        }
    }
}

/// Deterministic confidence for an evidence level.
pub fn confidence_for(level: EvidenceLevel) -> f64 {
    match level {
        EvidenceLevel::High => 0.90,
        EvidenceLevel::Low => 0.60,
        EvidenceLevel::None => 0.30,
        EvidenceLevel::Unknown => 0.50,
    }
}

/// Format a millisecond count with thousands separators: 1234 -> "1,234ms".
pub fn format_ms(ms: u64) -> String {
    let digits = ms.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str("ms");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_all_branches() {
        assert_eq!(confidence_for(EvidenceLevel::High), 0.90);
        assert_eq!(confidence_for(EvidenceLevel::Low), 0.60);
        assert_eq!(confidence_for(EvidenceLevel::None), 0.30);
        assert_eq!(confidence_for(EvidenceLevel::Unknown), 0.50);
    }

    #[test]
    fn test_doc_type_law_aliases() {
        assert_eq!(SourceKind::from_doc_type(Some("SFS")), SourceKind::Lag);
        assert_eq!(SourceKind::from_doc_type(Some("lag")), SourceKind::Lag);
        assert_eq!(SourceKind::from_doc_type(Some("LAG ")), SourceKind::Lag);
    }

    #[test]
    fn test_doc_type_prop_aliases() {
        assert_eq!(SourceKind::from_doc_type(Some("PROP")), SourceKind::Prop);
        assert_eq!(
            SourceKind::from_doc_type(Some("proposition")),
            SourceKind::Prop
        );
    }

    #[test]
    fn test_doc_type_sou() {
        assert_eq!(SourceKind::from_doc_type(Some("sou")), SourceKind::Sou);
        assert_eq!(SourceKind::from_doc_type(Some(" SOU ")), SourceKind::Sou);
    }

    #[test]
    fn test_doc_type_default_is_lag() {
        // Unknown and missing doc_types land in LAG. Intentional: see the
        // doc comment on from_doc_type.
        assert_eq!(SourceKind::from_doc_type(None), SourceKind::Lag);
        assert_eq!(SourceKind::from_doc_type(Some("motion")), SourceKind::Lag);
        assert_eq!(SourceKind::from_doc_type(Some("")), SourceKind::Lag);
    }

    #[test]
    fn test_format_ms_thousands_separators() {
        assert_eq!(format_ms(0), "0ms");
        assert_eq!(format_ms(999), "999ms");
        assert_eq!(format_ms(1234), "1,234ms");
        assert_eq!(format_ms(1234567), "1,234,567ms");
    }

    #[test]
    fn test_pipeline_split_1000ms() {
        let pipeline = PipelineEstimate::from_total_ms(1000);
        assert_eq!(pipeline.search, "100ms");
        assert_eq!(pipeline.gen, "800ms");
        assert_eq!(pipeline.verify, "100ms");
    }

    #[test]
    fn test_pipeline_split_rounds_to_nearest() {
        let pipeline = PipelineEstimate::from_total_ms(1234);
        assert_eq!(pipeline.search, "123ms");
        assert_eq!(pipeline.gen, "987ms");
        assert_eq!(pipeline.verify, "123ms");
    }

    #[test]
    fn test_source_kind_display() {
        assert_eq!(SourceKind::Lag.to_string(), "LAG");
        assert_eq!(SourceKind::Prop.to_string(), "PROP");
        assert_eq!(SourceKind::Sou.to_string(), "SOU");
    }

    #[test]
    fn test_display_source_serializes_type_field() {
        let source = DisplaySource {
            id: "1".to_string(),
            title: "Regeringsformen kap 2".to_string(),
            kind: SourceKind::Lag,
            relevance: 0.94,
        };
        let json = serde_json::to_string(&source).unwrap();
        assert!(json.contains(r#""type":"LAG""#));
    }
}
