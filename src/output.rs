use std::io::{self, Write};

use serde::Serialize;
use serde_json::json;

use crate::domain::{
    ChatMessage, DiscoveryInsight, GraphStats, Hypothesis, ResearchGap, TrendMetric,
};

pub struct JsonOutput;

impl JsonOutput {
    pub fn print_chat(message: &ChatMessage) -> io::Result<()> {
        Self::print_json(message)
    }

    pub fn print_gaps(gaps: &[ResearchGap]) -> io::Result<()> {
        Self::print_json(&gaps)
    }

    pub fn print_hypotheses(hypotheses: &[Hypothesis]) -> io::Result<()> {
        Self::print_json(&hypotheses)
    }

    pub fn print_vote() -> io::Result<()> {
        Self::print_json(&json!({ "ok": true }))
    }

    pub fn print_graph_stats(stats: &GraphStats) -> io::Result<()> {
        Self::print_json(stats)
    }

    pub fn print_path(nodes: &[String]) -> io::Result<()> {
        Self::print_json(&nodes)
    }

    pub fn print_insights(insights: &[DiscoveryInsight]) -> io::Result<()> {
        Self::print_json(&insights)
    }

    pub fn print_trends(trends: &[TrendMetric]) -> io::Result<()> {
        Self::print_json(&trends)
    }

    fn print_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}
