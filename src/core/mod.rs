//! Core business logic for OrderFlow.
//!
//! # Modules
//!
//! - [`pipeline`] - [`OrderPipeline`], the per-owner batch driver
//! - [`processors`] - the Type A, B and C rules
//! - [`outcome`] - [`BatchOutcome`] reporting
//!
//! # Workflow
//!
//! For each owner:
//!
//! 1. **Fetch**: load the owner's orders from the order store
//! 2. **Classify**: run the rule for each order's type
//! 3. **Prioritize**: mark orders above the amount threshold as high priority
//! 4. **Persist**: write status and priority back, downgrading to `db_error`
//!    when the write fails
//!
//! # Example
//!
//! ```rust,no_run
//! use orderflow::config::load_config;
//! use orderflow::core::OrderPipeline;
//! use orderflow::domain::OwnerId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("orderflow.toml")?;
//! let pipeline = OrderPipeline::from_config(&config).await?;
//!
//! let outcome = pipeline.run_for_owner(OwnerId::new(7)).await;
//! println!("Succeeded: {}", outcome.succeeded);
//! for (status, count) in outcome.status_counts() {
//!     println!("{status}: {count}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod outcome;
pub mod pipeline;
pub mod processors;

pub use outcome::BatchOutcome;
pub use pipeline::OrderPipeline;
