//! Process command implementation
//!
//! This module implements the `process` command, which runs the order
//! pipeline for one or more owners.

use crate::config::load_config;
use crate::core::processors::UNASSIGNED_OWNER;
use crate::core::{BatchOutcome, OrderPipeline};
use crate::domain::{OrderFlowError, OwnerId};
use clap::Args;

/// Exit code when every batch succeeded
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when at least one batch returned false
pub const EXIT_PARTIAL: i32 = 1;
/// Exit code for configuration errors
pub const EXIT_CONFIG: i32 = 2;
/// Exit code when a collaborator cannot be constructed or reached
pub const EXIT_CONNECTION: i32 = 4;
/// Exit code after Ctrl-C
pub const EXIT_INTERRUPTED: i32 = 130;

/// Arguments for the process command
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Owner ID(s) whose orders are processed (comma-separated)
    #[arg(long, value_name = "IDS")]
    pub owner_id: String,
}

impl ProcessArgs {
    /// Execute the process command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting process command");

        let owners = match OwnerId::parse_list(&self.owner_id) {
            Ok(owners) if !owners.is_empty() => owners,
            Ok(_) => {
                eprintln!("No owner IDs given");
                return Ok(EXIT_CONFIG);
            }
            Err(e) => {
                eprintln!("{e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let pipeline = match OrderPipeline::from_config(&config).await {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create order pipeline");
                eprintln!("Failed to initialize pipeline: {e}");
                return Ok(construction_exit_code(&e));
            }
        };

        println!("🚀 Processing orders for {} owner(s)...", owners.len());
        println!();

        let outcomes = tokio::select! {
            outcomes = run_owners(&pipeline, &owners) => outcomes,
            _ = tokio::signal::ctrl_c() => {
                tracing::warn!("Received SIGINT (Ctrl+C), processing interrupted");
                println!("\n⚠️  Interrupted. Orders already persisted keep their new status.");
                return Ok(EXIT_INTERRUPTED);
            }
        };

        for outcome in &outcomes {
            outcome.log_summary();
            print_outcome(outcome);
        }

        Ok(exit_code(&outcomes))
    }
}

async fn run_owners(pipeline: &OrderPipeline, owners: &[OwnerId]) -> Vec<BatchOutcome> {
    let mut outcomes = Vec::with_capacity(owners.len());
    for owner_id in owners {
        outcomes.push(pipeline.run_for_owner(*owner_id).await);
    }
    outcomes
}

fn construction_exit_code(error: &OrderFlowError) -> i32 {
    match error {
        OrderFlowError::Configuration(_) => EXIT_CONFIG,
        _ => EXIT_CONNECTION,
    }
}

/// Exit code for a finished run
pub fn exit_code(outcomes: &[BatchOutcome]) -> i32 {
    if outcomes.iter().all(|o| o.succeeded) {
        EXIT_SUCCESS
    } else {
        EXIT_PARTIAL
    }
}

fn print_outcome(outcome: &BatchOutcome) {
    let owner = outcome
        .owner_id
        .map_or_else(|| UNASSIGNED_OWNER.to_string(), |id| id.to_string());

    if outcome.fetch_failed {
        println!("❌ Owner {owner}: orders could not be fetched");
        println!();
        return;
    }

    let marker = if outcome.succeeded { "✅" } else { "⚠️ " };
    println!(
        "{marker} Owner {owner}: {} order(s) in {:.2}s",
        outcome.orders.len(),
        outcome.duration.as_secs_f64()
    );
    for (status, count) in outcome.status_counts() {
        println!("   {status}: {count}");
    }
    println!("   high priority: {}", outcome.high_priority_count());
    if !outcome.succeeded {
        println!(
            "   aborted, {} order(s) left unprocessed",
            outcome.untouched_count()
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StorageError;
    use std::time::Duration;

    fn outcome(succeeded: bool) -> BatchOutcome {
        BatchOutcome {
            owner_id: Some(OwnerId::new(1)),
            succeeded,
            fetch_failed: false,
            processed: 0,
            orders: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(&[outcome(true), outcome(true)]), EXIT_SUCCESS);
        assert_eq!(exit_code(&[outcome(true), outcome(false)]), EXIT_PARTIAL);
        assert_eq!(exit_code(&[]), EXIT_SUCCESS);
        assert_eq!(
            exit_code(&[BatchOutcome::fetch_failure(None, Duration::ZERO)]),
            EXIT_PARTIAL
        );
    }

    #[test]
    fn test_construction_exit_code() {
        let config_err = OrderFlowError::Configuration("bad url".to_string());
        assert_eq!(construction_exit_code(&config_err), EXIT_CONFIG);

        let storage_err = OrderFlowError::from(StorageError::ConnectionFailed("down".into()));
        assert_eq!(construction_exit_code(&storage_err), EXIT_CONNECTION);
    }

    #[tokio::test]
    async fn test_invalid_owner_ids() {
        let args = ProcessArgs {
            owner_id: "1,abc".to_string(),
        };
        assert_eq!(args.execute("unused.toml").await.unwrap(), EXIT_CONFIG);

        let args = ProcessArgs {
            owner_id: " , ".to_string(),
        };
        assert_eq!(args.execute("unused.toml").await.unwrap(), EXIT_CONFIG);
    }

    #[tokio::test]
    async fn test_missing_config_file() {
        let args = ProcessArgs {
            owner_id: "1".to_string(),
        };
        assert_eq!(
            args.execute("does-not-exist.toml").await.unwrap(),
            EXIT_CONFIG
        );
    }
}
