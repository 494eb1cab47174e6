//! Object model for caravel delivery pipelines.
//!
//! A [`Delivery`] declares an ordered list of resources, each pointing at a
//! cluster-scoped template by kind and name. Controllers read the spec,
//! validate the referenced templates, and report the outcome through typed
//! [`Condition`]s on the status sub-object.
//!
//! Identity is name-based: a delivery's `generation` is bumped by its owner
//! on every spec change, and `observed_generation` in the status records
//! which generation the most recent reconciliation saw.

#![forbid(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(clippy::panic)]

pub mod condition;
pub mod delivery;

pub use condition::{Condition, ConditionStatus, ConditionType};
pub use delivery::{
    ClusterTemplate, Delivery, DeliveryResource, DeliverySpec, DeliveryStatus, TemplateKind,
    TemplateRef, UnknownTemplateKind,
};
