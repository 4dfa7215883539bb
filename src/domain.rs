use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::EurekaError;
use crate::slug::slugify;

pub const DEFAULT_DOCUMENT_ID: u64 = 1;
pub const DEFAULT_TOP_K: u32 = 5;
pub const DEFAULT_MAX_DEPTH: u32 = 4;
pub const PLACEHOLDER_CITATION_URL: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Citation>>,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    #[default]
    Medium,
    High,
}

impl Impact {
    /// Case-insensitive match; unknown labels are `None`.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Impact::Low),
            "medium" => Some(Impact::Medium),
            "high" => Some(Impact::High),
            _ => None,
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::Low => write!(f, "low"),
            Impact::Medium => write!(f, "medium"),
            Impact::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchGap {
    pub id: String,
    pub title: String,
    pub description: String,
    pub concept1: String,
    pub concept2: String,
    pub impact: Impact,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub potential_path: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HypothesisStatus {
    #[default]
    Proposed,
    Claimed,
    Validated,
    Rejected,
}

impl HypothesisStatus {
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "proposed" => Some(HypothesisStatus::Proposed),
            "claimed" => Some(HypothesisStatus::Claimed),
            "validated" => Some(HypothesisStatus::Validated),
            "rejected" => Some(HypothesisStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hypothesis {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methodology: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_impact: Option<String>,
    pub confidence: f64,
    pub votes_up: u64,
    pub votes_down: u64,
    pub status: HypothesisStatus,
    pub entities: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GraphBreakdown {
    pub papers: u64,
    pub concepts: u64,
    pub methods: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    pub nodes: u64,
    pub edges: u64,
    pub density: f64,
    pub communities: u64,
    pub top_entities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<GraphBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphPathRequest {
    pub source: String,
    pub target: String,
    pub max_depth: Option<u32>,
}

impl GraphPathRequest {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            max_depth: None,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn effective_max_depth(&self) -> u32 {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Gap,
    Trend,
    Contradiction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveryInsight {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub detail: String,
    pub impact: Impact,
}

impl DiscoveryInsight {
    pub fn new(
        kind: InsightKind,
        title: impl Into<String>,
        detail: impl Into<String>,
        impact: Impact,
    ) -> Self {
        let title = title.into();
        Self {
            id: slugify(&title),
            kind,
            title,
            detail: detail.into(),
            impact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    pub fn from_delta(delta: f64) -> Self {
        if delta >= 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendMetric {
    id: String,
    label: String,
    delta: f64,
    direction: TrendDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    velocity: Option<String>,
}

impl TrendMetric {
    pub fn new(label: impl Into<String>, delta: f64, velocity: Option<String>) -> Self {
        let label = label.into();
        let delta = if delta.is_finite() { delta } else { 0.0 };
        Self {
            id: slugify(&label),
            label,
            delta,
            direction: TrendDirection::from_delta(delta),
            velocity,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn direction(&self) -> TrendDirection {
        self.direction
    }

    pub fn velocity(&self) -> Option<&str> {
        self.velocity.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteDirection::Up => "up",
            VoteDirection::Down => "down",
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteDirection {
    type Err = EurekaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(VoteDirection::Up),
            "down" => Ok(VoteDirection::Down),
            _ => Err(EurekaError::InvalidVoteDirection(value.to_string())),
        }
    }
}
