use assert_matches::assert_matches;

use eureka_client::domain::{
    DiscoveryInsight, GraphPathRequest, Impact, InsightKind, TrendDirection, TrendMetric,
    VoteDirection,
};
use eureka_client::error::EurekaError;

#[test]
fn parse_vote_direction() {
    let up: VoteDirection = "UP".parse().unwrap();
    assert_eq!(up, VoteDirection::Up);
    let down: VoteDirection = " down ".parse().unwrap();
    assert_eq!(down, VoteDirection::Down);
}

#[test]
fn parse_vote_direction_invalid() {
    let err = "sideways".parse::<VoteDirection>().unwrap_err();
    assert_matches!(err, EurekaError::InvalidVoteDirection(_));
}

#[test]
fn impact_labels() {
    assert_eq!(Impact::from_label("HIGH"), Some(Impact::High));
    assert_eq!(Impact::from_label("severe"), None);
    assert_eq!(Impact::default(), Impact::Medium);
}

#[test]
fn trend_direction_follows_delta() {
    let rising = TrendMetric::new("Spatial omics", 12.0, None);
    assert_eq!(rising.direction(), TrendDirection::Up);
    assert_eq!(rising.id(), "spatial-omics");

    let flat = TrendMetric::new("Flat", 0.0, None);
    assert_eq!(flat.direction(), TrendDirection::Up);

    let falling = TrendMetric::new("Microarrays", -4.0, Some("slow".to_string()));
    assert_eq!(falling.direction(), TrendDirection::Down);
    assert_eq!(falling.velocity(), Some("slow"));
}

#[test]
fn trend_rejects_non_finite_delta() {
    let metric = TrendMetric::new("Broken", f64::NAN, None);
    assert_eq!(metric.delta(), 0.0);
    assert_eq!(metric.direction(), TrendDirection::Up);
}

#[test]
fn insight_id_is_derived_from_title() {
    let insight = DiscoveryInsight::new(
        InsightKind::Contradiction,
        "Statins & Cognition",
        "detail",
        Impact::Medium,
    );
    assert_eq!(insight.id, "statins-cognition");
}

#[test]
fn graph_path_default_depth() {
    let request = GraphPathRequest::new("Microglia", "Butyrate");
    assert_eq!(request.effective_max_depth(), 4);
    assert_eq!(request.with_max_depth(2).effective_max_depth(), 2);
}

#[test]
fn entities_serialize_with_ui_field_names() {
    let metric = TrendMetric::new("Spatial omics", -3.5, None);
    let value = serde_json::to_value(&metric).unwrap();
    assert_eq!(value["direction"], "down");
    assert_eq!(value["label"], "Spatial omics");
    assert!(value.get("velocity").is_none());

    let insight = DiscoveryInsight::new(InsightKind::Gap, "A gap", "d", Impact::Low);
    let value = serde_json::to_value(&insight).unwrap();
    assert_eq!(value["type"], "gap");
    assert_eq!(value["impact"], "low");
}
