//! Storage contract consumed by caravel controllers.
//!
//! [`Repository`] is a capability interface over the three operations a
//! reconciliation cycle needs: fetch a delivery, resolve a referenced
//! template, and persist a status update. Controllers hold it as
//! `Arc<dyn Repository>` so tests can substitute a recording stub without
//! touching real storage.
//!
//! [`InMemoryRepository`] is the reference backend, used by tests and demos.

#![forbid(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(clippy::panic)]

pub mod error;
pub mod memory;
pub mod repository;

pub use error::{Error, Result};
pub use memory::InMemoryRepository;
pub use repository::Repository;
