use clap::Parser;
use parley_analysis::store::JsonFileStore;
use parley_analysis::workflow::{CancelToken, FlowState, PollConfig, SimulationWorkflow};
use parley_backend_sdk::HttpResearchBackend;
use shared_types::Questionnaire;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run an interview simulation end to end", long_about = None)]
struct Args {
    /// Base URL of the research backend
    #[arg(long, default_value = parley_backend_sdk::DEFAULT_BASE_URL)]
    backend_url: String,

    /// Bearer token for the backend (optional for dev backends)
    #[arg(long)]
    token: Option<String>,

    /// Path to a questionnaire JSON file
    #[arg(short, long)]
    questionnaire: PathBuf,

    /// Where simulation results are appended
    #[arg(long, default_value = "simulation_results.json")]
    results_path: PathBuf,

    /// Simulated interviews per stakeholder
    #[arg(long, default_value_t = 1)]
    interviews: u32,

    /// Give up polling after this many seconds
    #[arg(long, default_value_t = 600)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let content = std::fs::read_to_string(&args.questionnaire)?;
    let questionnaire: Questionnaire = serde_json::from_str(&content)?;
    info!(
        session_id = %questionnaire.session_id,
        stakeholders = questionnaire.stakeholders.len(),
        questions = questionnaire.question_count(),
        "Loaded questionnaire"
    );

    let mut backend = HttpResearchBackend::new(&args.backend_url)?;
    if let Some(token) = &args.token {
        backend = backend.with_bearer_token(token);
    }

    let store = Arc::new(JsonFileStore::new(&args.results_path));
    let workflow = SimulationWorkflow::new(Arc::new(backend), store)
        .with_interviews_per_stakeholder(args.interviews)
        .with_poll_config(PollConfig {
            interval: Duration::from_secs(2),
            timeout: Duration::from_secs(args.timeout_secs),
        });

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, cancelling simulation (backend job keeps running)");
                cancel.cancel();
            }
        });
    }

    let mut state = workflow.state();
    tokio::spawn(async move {
        while state.changed().await.is_ok() {
            let current = state.borrow().clone();
            if let FlowState::Simulating { percent } = current {
                info!(percent, "Simulation in progress");
            }
        }
    });

    let results = workflow.run(&questionnaire, &cancel).await?;
    info!(
        simulation_id = %results.simulation_id,
        interviews = results.interviews.len(),
        results_path = %args.results_path.display(),
        "Simulation complete"
    );

    Ok(())
}
