//! Fraud check CLI
//!
//! Reads one JSON transaction from a file (or stdin) and prints the
//! assessment.

use anyhow::Context;
use fraud_engine::{FraudConfig, FraudEngine, TransactionData};
use std::io::Read;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if std::env::var("FRAUD_ENGINE_LOG_JSON").is_ok() {
        builder.json().init();
    } else {
        builder.init();
    }

    let mut args = std::env::args().skip(1);
    let input_path = args.next().map(PathBuf::from);
    let policy_path = std::env::var("FRAUD_ENGINE_POLICY_FILE").ok().map(PathBuf::from);

    let engine = match policy_path {
        Some(path) => {
            let config = FraudConfig::load(Some(&path), std::env::vars())
                .context("Failed to load fraud engine configuration")?;
            FraudEngine::new(config).context("Failed to build fraud policy")?
        }
        None => FraudEngine::from_env()
            .context("Failed to build fraud policy from environment")?,
    };

    let raw = match &input_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read transaction from stdin")?;
            buf
        }
    };

    let tx = TransactionData::from_json(&raw).context("Failed to parse transaction JSON")?;

    let assessment = engine.assess(&tx);
    tracing::info!(
        check_id = %assessment.check_id,
        decision = %assessment.result.decision,
        "Fraud check complete"
    );

    println!("{}", serde_json::to_string_pretty(&assessment)?);
    Ok(())
}
