//! Substitute dataset served whenever live data is unavailable or empty.
//!
//! Each accessor builds a fresh copy. Operations return these lists whole,
//! never merged with partial live data.

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::domain::{
    ChatMessage, ChatRole, Citation, DiscoveryInsight, GraphBreakdown, GraphStats, Hypothesis,
    HypothesisStatus, Impact, InsightKind, PLACEHOLDER_CITATION_URL, ResearchGap, TrendMetric,
};

pub const CHAT_CONTENT: &str = "Recent literature links gut microbiome composition to \
neuroinflammation through short-chain fatty acid signalling. The strongest evidence comes from \
germ-free mouse models; human cohort data remain sparse, which makes this a promising area for \
targeted follow-up studies.";

pub const OFFLINE_NOTICE: &str = "(Mocked response while API is offline.)";

/// The substitute assistant reply. Content is fixed; id and timestamp are
/// fresh per call so repeated replies stay distinguishable.
pub fn chat_response() -> ChatMessage {
    ChatMessage {
        id: Uuid::new_v4().to_string(),
        role: ChatRole::Assistant,
        content: CHAT_CONTENT.to_string(),
        citations: Some(vec![
            Citation {
                title: "Microbiota-gut-brain axis in neurodegeneration".to_string(),
                url: PLACEHOLDER_CITATION_URL.to_string(),
            },
            Citation {
                title: "Short-chain fatty acids and microglial maturation".to_string(),
                url: PLACEHOLDER_CITATION_URL.to_string(),
            },
        ]),
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Same reply, marked as produced while the API was unreachable.
pub fn offline_chat_response() -> ChatMessage {
    let mut message = chat_response();
    message.content = format!("{}\n\n{OFFLINE_NOTICE}", message.content);
    message
}

pub fn gaps() -> Vec<ResearchGap> {
    vec![
        ResearchGap {
            id: "microbiome-neuroinflammation".to_string(),
            title: "Microbiome & Neuroinflammation".to_string(),
            description: "Few studies connect specific bacterial metabolites to microglial \
                activation in human cohorts."
                .to_string(),
            concept1: "Gut microbiome".to_string(),
            concept2: "Neuroinflammation".to_string(),
            impact: Impact::High,
            confidence: 0.82,
            potential_path: vec![
                "Gut microbiome".to_string(),
                "Short-chain fatty acids".to_string(),
                "Microglia".to_string(),
                "Neuroinflammation".to_string(),
            ],
        },
        ResearchGap {
            id: "crispr-screens-drug-resistance".to_string(),
            title: "CRISPR Screens for Drug Resistance".to_string(),
            description: "Genome-wide screens rarely target resistance to combination \
                therapies in solid tumours."
                .to_string(),
            concept1: "CRISPR screening".to_string(),
            concept2: "Drug resistance".to_string(),
            impact: Impact::Medium,
            confidence: 0.67,
            potential_path: vec![
                "CRISPR screening".to_string(),
                "Synthetic lethality".to_string(),
                "Drug resistance".to_string(),
            ],
        },
        ResearchGap {
            id: "sleep-metabolic-syndrome".to_string(),
            title: "Sleep Fragmentation & Metabolic Syndrome".to_string(),
            description: "Longitudinal evidence linking sleep fragmentation to insulin \
                resistance is limited to small samples."
                .to_string(),
            concept1: "Sleep fragmentation".to_string(),
            concept2: "Metabolic syndrome".to_string(),
            impact: Impact::Low,
            confidence: 0.48,
            potential_path: Vec::new(),
        },
    ]
}

pub fn hypotheses() -> Vec<Hypothesis> {
    vec![
        Hypothesis {
            id: "1".to_string(),
            text: "Butyrate-producing bacteria reduce microglial activation via HDAC \
                inhibition."
                .to_string(),
            rationale: Some(
                "Butyrate is a known HDAC inhibitor and crosses the blood-brain barrier."
                    .to_string(),
            ),
            methodology: Some(
                "Colonise germ-free mice with butyrate producers and profile microglia by \
                 single-cell RNA-seq."
                    .to_string(),
            ),
            expected_impact: Some("New probiotic strategies for neurodegeneration.".to_string()),
            confidence: 0.74,
            votes_up: 12,
            votes_down: 2,
            status: HypothesisStatus::Proposed,
            entities: vec![
                "Butyrate".to_string(),
                "Microglia".to_string(),
                "HDAC".to_string(),
            ],
        },
        Hypothesis {
            id: "2".to_string(),
            text: "Loss of KEAP1 sensitises lung adenocarcinoma to glutaminase inhibitors."
                .to_string(),
            rationale: Some(
                "NRF2 activation rewires glutamine metabolism in KEAP1-mutant cells.".to_string(),
            ),
            methodology: None,
            expected_impact: None,
            confidence: 0.61,
            votes_up: 7,
            votes_down: 1,
            status: HypothesisStatus::Claimed,
            entities: vec![
                "KEAP1".to_string(),
                "NRF2".to_string(),
                "Glutaminase".to_string(),
            ],
        },
    ]
}

pub fn graph_stats() -> GraphStats {
    GraphStats {
        nodes: 12_480,
        edges: 48_215,
        density: 0.0006,
        communities: 37,
        top_entities: vec![
            "Microglia".to_string(),
            "CRISPR".to_string(),
            "Gut microbiome".to_string(),
            "Insulin resistance".to_string(),
            "NRF2".to_string(),
        ],
        breakdown: Some(GraphBreakdown {
            papers: 3_210,
            concepts: 8_740,
            methods: 530,
        }),
    }
}

pub fn insights() -> Vec<DiscoveryInsight> {
    vec![
        DiscoveryInsight::new(
            InsightKind::Gap,
            "Microbiome metabolites in neuroinflammation",
            "Metabolite-level mechanisms are under-studied relative to taxonomic surveys.",
            Impact::High,
        ),
        DiscoveryInsight::new(
            InsightKind::Trend,
            "Spatial transcriptomics adoption",
            "Publications using spatial transcriptomics doubled over the last two years.",
            Impact::Medium,
        ),
        DiscoveryInsight::new(
            InsightKind::Contradiction,
            "Statins and cognitive decline",
            "Cohort studies disagree on whether statin use slows or accelerates decline.",
            Impact::Medium,
        ),
    ]
}

pub fn trends() -> Vec<TrendMetric> {
    vec![
        TrendMetric::new("Spatial transcriptomics", 42.0, Some("accelerating".to_string())),
        TrendMetric::new("Large language models in biology", 35.0, Some("steady".to_string())),
        TrendMetric::new("Microarray studies", -12.0, Some("declining".to_string())),
    ]
}
