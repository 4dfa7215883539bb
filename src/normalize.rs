//! Boundary validation for backend payloads.
//!
//! Every field the backend sends is treated as optional. Each `*_from_value`
//! function maps one raw record onto the internal model, substituting the
//! per-field defaults instead of failing. Only a missing, mistyped or empty
//! top-level list is reported as an error, which the facade turns into a
//! whole-operation fallback.

use serde_json::Value;

use crate::domain::{
    Citation, DiscoveryInsight, GraphBreakdown, GraphStats, Hypothesis, HypothesisStatus, Impact,
    InsightKind, PLACEHOLDER_CITATION_URL, ResearchGap, TrendMetric,
};
use crate::error::EurekaError;
use crate::slug::slugify;

/// Returns the non-empty list stored under `key`.
pub fn required_list<'a>(
    payload: &'a Value,
    key: &'static str,
) -> Result<&'a [Value], EurekaError> {
    let items = payload
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| EurekaError::Shape(format!("missing `{key}` list")))?;
    if items.is_empty() {
        return Err(EurekaError::EmptyList(key));
    }
    Ok(items.as_slice())
}

pub fn gap_from_value(raw: &Value) -> ResearchGap {
    let title = text_field(raw, "title").unwrap_or_default();
    let id = id_field(raw, "id").unwrap_or_else(|| slugify(&title));
    let impact = text_field(raw, "impact")
        .and_then(|label| Impact::from_label(&label))
        .unwrap_or_default();

    ResearchGap {
        id,
        description: text_field(raw, "description").unwrap_or_default(),
        concept1: text_field(raw, "concept1").unwrap_or_default(),
        concept2: text_field(raw, "concept2").unwrap_or_default(),
        impact,
        confidence: confidence_field(raw, "confidence"),
        potential_path: string_list(raw.get("potential_path")),
        title,
    }
}

pub fn hypothesis_from_value(raw: &Value) -> Hypothesis {
    let text = text_field(raw, "text").unwrap_or_default();
    let id = id_field(raw, "id").unwrap_or_else(|| slugify(&text));
    let status = text_field(raw, "status")
        .and_then(|label| HypothesisStatus::from_label(&label))
        .unwrap_or_default();

    let mut entities: Vec<String> = Vec::new();
    for entity in string_list(raw.get("entities")) {
        if !entities.contains(&entity) {
            entities.push(entity);
        }
    }

    Hypothesis {
        id,
        text,
        rationale: text_field(raw, "rationale"),
        methodology: text_field(raw, "methodology"),
        expected_impact: text_field(raw, "expected_impact"),
        confidence: confidence_field(raw, "confidence"),
        votes_up: count_field(raw, "votes_up"),
        votes_down: count_field(raw, "votes_down"),
        status,
        entities,
    }
}

pub fn graph_stats_from_value(raw: &Value) -> GraphStats {
    let breakdown = raw
        .get("breakdown")
        .filter(|value| value.is_object())
        .map(|value| GraphBreakdown {
            papers: count_field(value, "papers"),
            concepts: count_field(value, "concepts"),
            methods: count_field(value, "methods"),
        });

    GraphStats {
        nodes: count_field(raw, "nodes"),
        edges: count_field(raw, "edges"),
        density: number_field(raw, "density").unwrap_or(0.0).max(0.0),
        communities: count_field(raw, "communities"),
        top_entities: string_list(raw.get("top_entities")),
        breakdown,
    }
}

pub fn insight_from_value(raw: &Value) -> DiscoveryInsight {
    DiscoveryInsight::new(
        InsightKind::Contradiction,
        text_field(raw, "title").unwrap_or_default(),
        text_field(raw, "description").unwrap_or_default(),
        Impact::Medium,
    )
}

pub fn trend_from_value(raw: &Value) -> TrendMetric {
    TrendMetric::new(
        text_field(raw, "title").unwrap_or_default(),
        parse_growth(raw.get("growth")),
        id_field(raw, "velocity"),
    )
}

/// Reads a growth figure such as `"+12%"`, `"-4 %"` or `7.5`.
///
/// Absent, null, empty and unparsable values all read as 0.
pub fn parse_growth(raw: Option<&Value>) -> f64 {
    let parsed = match raw {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => {
            let cleaned: String = text.chars().filter(|ch| !matches!(*ch, '+' | '%')).collect();
            let cleaned = cleaned.trim();
            if cleaned.is_empty() {
                Some(0.0)
            } else {
                cleaned.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    parsed.filter(|value| value.is_finite()).unwrap_or(0.0)
}

/// Builds citations from a `sources` list; `None` when the backend sent no list.
pub fn citations_from_sources(raw: Option<&Value>) -> Option<Vec<Citation>> {
    let sources = raw?.as_array()?;
    let citations = sources
        .iter()
        .enumerate()
        .map(|(index, source)| Citation {
            title: text_field(source, "title")
                .or_else(|| id_field(source, "document_id"))
                .unwrap_or_else(|| format!("Source {}", index + 1)),
            url: PLACEHOLDER_CITATION_URL.to_string(),
        })
        .collect();
    Some(citations)
}

/// Picks the first path's nodes, then a flat `path`, then nothing.
pub fn path_from_value(raw: &Value) -> Vec<String> {
    let first_path_nodes = raw
        .get("paths")
        .and_then(Value::as_array)
        .and_then(|paths| paths.first())
        .and_then(|path| path.get("nodes"))
        .filter(|nodes| nodes.is_array());
    let flat_path = raw.get("path").filter(|path| path.is_array());

    string_list(first_path_nodes.or(flat_path))
}

fn text_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(|value| value.to_string())
}

/// Strings pass through; numbers are stringified.
fn id_field(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        _ => None,
    }
}

fn number_field(raw: &Value, key: &str) -> Option<f64> {
    let parsed = match raw.get(key)? {
        Value::Number(value) => value.as_f64(),
        Value::String(value) => value.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|value| value.is_finite())
}

fn confidence_field(raw: &Value, key: &str) -> f64 {
    number_field(raw, key).unwrap_or(0.0).clamp(0.0, 1.0)
}

fn count_field(raw: &Value, key: &str) -> u64 {
    number_field(raw, key)
        .map(|value| value.max(0.0).round() as u64)
        .unwrap_or(0)
}

fn string_list(raw: Option<&Value>) -> Vec<String> {
    raw.and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(|item| item.to_string())
                .collect()
        })
        .unwrap_or_default()
}
