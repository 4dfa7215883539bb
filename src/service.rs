//! The research facade.
//!
//! Every public operation is total: it resolves with normalized live data or
//! with the substitute dataset, never with an error. The `live_*` methods
//! expose the underlying success/failure decision so it can be tested on its
//! own.

use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{
    ChatMessage, ChatRole, DEFAULT_DOCUMENT_ID, DEFAULT_TOP_K, DiscoveryInsight, GraphPathRequest,
    GraphStats, Hypothesis, ResearchGap, TrendMetric, VoteDirection,
};
use crate::error::EurekaError;
use crate::fallback;
use crate::normalize::{
    citations_from_sources, gap_from_value, graph_stats_from_value, hypothesis_from_value,
    insight_from_value, path_from_value, required_list, trend_from_value,
};
use crate::transport::{ApiRequest, Transport};

pub const ASK_PATH: &str = "/queries/ask";
pub const GAPS_PATH: &str = "/discovery/gaps";
pub const HYPOTHESES_PATH: &str = "/discovery/hypotheses";
pub const GRAPH_STATS_PATH: &str = "/discovery/graph-stats";
pub const PATH_PATH: &str = "/discovery/path";
pub const CONTRADICTIONS_PATH: &str = "/discovery/contradictions";
pub const TRENDS_PATH: &str = "/discovery/trends";

/// The id is percent-encoded so it always stays a single path segment.
pub fn vote_path(id: &str) -> String {
    format!("{HYPOTHESES_PATH}/{}/vote", urlencoding::encode(id))
}

#[derive(Clone)]
pub struct ResearchService<T: Transport> {
    transport: T,
    dev_mode: bool,
}

impl<T: Transport> ResearchService<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            dev_mode: false,
        }
    }

    /// Enables warn-level diagnostics when an operation falls back.
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn submit_chat_query(&self, prompt: &str, document_id: Option<u64>) -> ChatMessage {
        match self.live_chat_query(prompt, document_id).await {
            Ok(message) => message,
            Err(err) => {
                self.report_fallback("submit_chat_query", &err);
                fallback::offline_chat_response()
            }
        }
    }

    pub async fn live_chat_query(
        &self,
        prompt: &str,
        document_id: Option<u64>,
    ) -> Result<ChatMessage, EurekaError> {
        let request = ApiRequest::post(
            ASK_PATH,
            json!({
                "question": prompt,
                "document_id": document_id.unwrap_or(DEFAULT_DOCUMENT_ID),
                "top_k": DEFAULT_TOP_K,
            }),
        );
        let payload = self.transport.send(request).await?;

        let content = payload
            .get("answer")
            .and_then(Value::as_str)
            .map(|answer| answer.to_string())
            .unwrap_or_else(|| fallback::chat_response().content);

        Ok(ChatMessage {
            id: Uuid::new_v4().to_string(),
            role: ChatRole::Assistant,
            content,
            citations: citations_from_sources(payload.get("sources")),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    pub async fn fetch_research_gaps(&self) -> Vec<ResearchGap> {
        self.live_research_gaps()
            .await
            .unwrap_or_else(|err| self.substitute("fetch_research_gaps", &err, fallback::gaps))
    }

    pub async fn live_research_gaps(&self) -> Result<Vec<ResearchGap>, EurekaError> {
        let payload = self.transport.send(ApiRequest::get(GAPS_PATH)).await?;
        let gaps = required_list(&payload, "gaps")?;
        Ok(gaps.iter().map(gap_from_value).collect())
    }

    pub async fn fetch_hypotheses(&self) -> Vec<Hypothesis> {
        self.live_hypotheses()
            .await
            .unwrap_or_else(|err| self.substitute("fetch_hypotheses", &err, fallback::hypotheses))
    }

    pub async fn live_hypotheses(&self) -> Result<Vec<Hypothesis>, EurekaError> {
        let payload = self.transport.send(ApiRequest::get(HYPOTHESES_PATH)).await?;
        let hypotheses = required_list(&payload, "hypotheses")?;
        Ok(hypotheses.iter().map(hypothesis_from_value).collect())
    }

    /// Records a vote. Failures are logged and otherwise ignored.
    pub async fn vote_on_hypothesis(&self, id: &str, direction: VoteDirection) {
        if let Err(err) = self.live_vote(id, direction).await {
            if self.dev_mode {
                warn!(hypothesis = id, error = %err, "vote endpoint unavailable, running offline");
            } else {
                debug!(hypothesis = id, error = %err, "vote not recorded");
            }
        }
    }

    pub async fn live_vote(&self, id: &str, direction: VoteDirection) -> Result<(), EurekaError> {
        let request = ApiRequest::post(vote_path(id), json!({ "direction": direction.as_str() }));
        self.transport.send(request).await?;
        Ok(())
    }

    pub async fn fetch_graph_stats(&self) -> GraphStats {
        self.live_graph_stats()
            .await
            .unwrap_or_else(|err| self.substitute("fetch_graph_stats", &err, fallback::graph_stats))
    }

    pub async fn live_graph_stats(&self) -> Result<GraphStats, EurekaError> {
        let payload = self.transport.send(ApiRequest::get(GRAPH_STATS_PATH)).await?;
        if !payload.is_object() {
            return Err(EurekaError::Shape("graph stats is not an object".to_string()));
        }
        Ok(graph_stats_from_value(&payload))
    }

    pub async fn fetch_graph_path(&self, request: &GraphPathRequest) -> Vec<String> {
        self.live_graph_path(request)
            .await
            .unwrap_or_else(|err| self.substitute("fetch_graph_path", &err, Vec::new))
    }

    pub async fn live_graph_path(
        &self,
        request: &GraphPathRequest,
    ) -> Result<Vec<String>, EurekaError> {
        let body = json!({
            "concept1": request.source,
            "concept2": request.target,
            "max_depth": request.effective_max_depth(),
        });
        let payload = self.transport.send(ApiRequest::post(PATH_PATH, body)).await?;
        Ok(path_from_value(&payload))
    }

    pub async fn fetch_discovery_insights(&self) -> Vec<DiscoveryInsight> {
        self.live_discovery_insights()
            .await
            .unwrap_or_else(|err| {
                self.substitute("fetch_discovery_insights", &err, fallback::insights)
            })
    }

    pub async fn live_discovery_insights(&self) -> Result<Vec<DiscoveryInsight>, EurekaError> {
        let payload = self.transport.send(ApiRequest::get(CONTRADICTIONS_PATH)).await?;
        let items = required_list(&payload, "contradictions")?;
        Ok(items.iter().map(insight_from_value).collect())
    }

    pub async fn fetch_trend_metrics(&self) -> Vec<TrendMetric> {
        self.live_trend_metrics()
            .await
            .unwrap_or_else(|err| self.substitute("fetch_trend_metrics", &err, fallback::trends))
    }

    pub async fn live_trend_metrics(&self) -> Result<Vec<TrendMetric>, EurekaError> {
        let payload = self.transport.send(ApiRequest::get(TRENDS_PATH)).await?;
        let trends = required_list(&payload, "trends")?;
        Ok(trends.iter().map(trend_from_value).collect())
    }

    fn substitute<R>(&self, operation: &str, err: &EurekaError, make: impl FnOnce() -> R) -> R {
        self.report_fallback(operation, err);
        make()
    }

    fn report_fallback(&self, operation: &str, err: &EurekaError) {
        if self.dev_mode {
            warn!(operation, error = %err, "live data unavailable, using substitute dataset");
        } else {
            debug!(operation, error = %err, "using substitute dataset");
        }
    }
}
