//! Reconciler for caravel delivery pipelines.
//!
//! One reconciliation cycle brings a declared delivery into a consistent,
//! observable status:
//!
//! 1. Fetch the delivery by name through the [`Repository`] contract.
//! 2. Validate that every referenced template exists, never stopping at the
//!    first broken reference.
//! 3. Write back a status summarizing readiness, stamped with the spec
//!    generation that was just observed.
//!
//! Cycles are idempotent and safe to re-run arbitrarily often; retry and
//! backoff policy belong to the external engine that invokes them.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use caravel_delivery::Reconciler;
//! use caravel_repository::InMemoryRepository;
//!
//! #[tokio::main]
//! async fn main() {
//!     let repo = Arc::new(InMemoryRepository::new());
//!     let reconciler = Reconciler::new(repo);
//!
//!     match reconciler.reconcile("my-delivery").await {
//!         Ok(result) => println!("requeue after {:?}", result.requeue_after),
//!         Err(err) => eprintln!("reconcile failed: {err}"),
//!     }
//! }
//! ```
//!
//! [`Repository`]: caravel_repository::Repository

#![forbid(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(clippy::panic)]

pub mod conditions;
pub mod error;
pub mod log;
pub mod reconciler;

pub use error::{Error, Result};
pub use log::{ReconcileLog, TracingLog};
pub use reconciler::{ReconcileResult, Reconciler, REQUEUE_INTERVAL};
