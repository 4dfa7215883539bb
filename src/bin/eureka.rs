use std::process::ExitCode;

use clap::{Parser, Subcommand};
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use eureka_client::config::{ConfigLoader, Overrides};
use eureka_client::domain::{DEFAULT_MAX_DEPTH, GraphPathRequest, VoteDirection};
use eureka_client::error::EurekaError;
use eureka_client::output::JsonOutput;
use eureka_client::service::ResearchService;
use eureka_client::transport::HttpTransport;

#[derive(Parser)]
#[command(name = "eureka")]
#[command(
    about = "Query the Eureka research backend, falling back to offline data when it is unreachable"
)]
#[command(version, author)]
struct Cli {
    /// Path to a JSON config file (defaults to ./eureka.json when present)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Backend base address; overrides config file and EUREKA_API_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Ask a question against an indexed document")]
    Ask {
        prompt: String,
        #[arg(long)]
        document_id: Option<u64>,
    },
    #[command(about = "List research gaps")]
    Gaps,
    #[command(about = "List hypotheses")]
    Hypotheses,
    #[command(about = "Vote on a hypothesis")]
    Vote {
        id: String,
        #[arg(value_enum)]
        direction: VoteDirection,
    },
    #[command(about = "Show knowledge-graph statistics")]
    Stats,
    #[command(about = "Find a concept path through the knowledge graph")]
    Path {
        source: String,
        target: String,
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: u32,
    },
    #[command(about = "List discovery insights")]
    Insights,
    #[command(about = "List trend metrics")]
    Trends,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(report) = run().await {
        eprintln!("{report:?}");
        if let Some(err) = report.downcast_ref::<EurekaError>() {
            return ExitCode::from(map_exit_code(err));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &EurekaError) -> u8 {
    if error.is_config() { 2 } else { 1 }
}

async fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let overrides = Overrides::from_env().with_base_url(cli.base_url);
    let config = ConfigLoader::resolve(cli.config.as_deref(), overrides)?;
    let transport = HttpTransport::new(&config)?;
    let service = ResearchService::new(transport).with_dev_mode(config.dev_mode);

    match cli.command {
        Command::Ask {
            prompt,
            document_id,
        } => {
            let message = service.submit_chat_query(&prompt, document_id).await;
            JsonOutput::print_chat(&message).into_diagnostic()
        }
        Command::Gaps => {
            let gaps = service.fetch_research_gaps().await;
            JsonOutput::print_gaps(&gaps).into_diagnostic()
        }
        Command::Hypotheses => {
            let hypotheses = service.fetch_hypotheses().await;
            JsonOutput::print_hypotheses(&hypotheses).into_diagnostic()
        }
        Command::Vote { id, direction } => {
            service.vote_on_hypothesis(&id, direction).await;
            JsonOutput::print_vote().into_diagnostic()
        }
        Command::Stats => {
            let stats = service.fetch_graph_stats().await;
            JsonOutput::print_graph_stats(&stats).into_diagnostic()
        }
        Command::Path {
            source,
            target,
            max_depth,
        } => {
            let request = GraphPathRequest::new(source, target).with_max_depth(max_depth);
            let nodes = service.fetch_graph_path(&request).await;
            JsonOutput::print_path(&nodes).into_diagnostic()
        }
        Command::Insights => {
            let insights = service.fetch_discovery_insights().await;
            JsonOutput::print_insights(&insights).into_diagnostic()
        }
        Command::Trends => {
            let trends = service.fetch_trend_metrics().await;
            JsonOutput::print_trends(&trends).into_diagnostic()
        }
    }
}
