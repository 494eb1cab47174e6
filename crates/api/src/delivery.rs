//! Delivery resources and the templates they reference.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::condition::{Condition, ConditionType};

/// Template kinds a delivery resource may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateKind {
    ClusterSourceTemplate,
    ClusterDeploymentTemplate,
    ClusterTemplate,
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClusterSourceTemplate => write!(f, "ClusterSourceTemplate"),
            Self::ClusterDeploymentTemplate => write!(f, "ClusterDeploymentTemplate"),
            Self::ClusterTemplate => write!(f, "ClusterTemplate"),
        }
    }
}

/// Error returned when parsing an unrecognized template kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown template kind '{0}'")]
pub struct UnknownTemplateKind(pub String);

impl FromStr for TemplateKind {
    type Err = UnknownTemplateKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ClusterSourceTemplate" => Ok(Self::ClusterSourceTemplate),
            "ClusterDeploymentTemplate" => Ok(Self::ClusterDeploymentTemplate),
            "ClusterTemplate" => Ok(Self::ClusterTemplate),
            other => Err(UnknownTemplateKind(other.to_string())),
        }
    }
}

/// Reference to a cluster-scoped template by kind and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateRef {
    pub kind: TemplateKind,
    pub name: String,
}

impl TemplateRef {
    /// Create a template reference.
    pub fn new(kind: TemplateKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}

/// A cluster-scoped template object.
///
/// Reconciliation only checks that referenced templates exist; the body is
/// opaque at this layer and carried as raw JSON for downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterTemplate {
    pub kind: TemplateKind,
    pub name: String,
    #[serde(default)]
    pub template: serde_json::Value,
}

impl ClusterTemplate {
    /// Create an empty template object.
    pub fn new(kind: TemplateKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            template: serde_json::Value::Null,
        }
    }
}

/// One entry in a delivery spec: a named pointer to a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryResource {
    /// Name of the entry, unique within the spec.
    pub name: String,
    /// The template this entry resolves against.
    pub template_ref: TemplateRef,
}

impl DeliveryResource {
    /// Create a spec entry.
    pub fn new(name: impl Into<String>, template_ref: TemplateRef) -> Self {
        Self {
            name: name.into(),
            template_ref,
        }
    }
}

/// Declared shape of a delivery: an ordered sequence of resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliverySpec {
    #[serde(default)]
    pub resources: Vec<DeliveryResource>,
}

/// Observed state written back by the reconciler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryStatus {
    /// Spec generation the most recent reconciliation saw.
    #[serde(default)]
    pub observed_generation: i64,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl DeliveryStatus {
    /// Look up the condition of a given type, if present.
    pub fn condition(&self, type_: ConditionType) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.type_ == type_)
    }
}

/// The reconciled entity: a declared delivery pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    /// Name, unique within namespace scope.
    pub name: String,
    /// Monotonically increasing, bumped by the owner on every spec change.
    #[serde(default)]
    pub generation: i64,
    #[serde(default)]
    pub spec: DeliverySpec,
    #[serde(default)]
    pub status: DeliveryStatus,
}

impl Delivery {
    /// Create a delivery with an empty spec.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generation: 0,
            spec: DeliverySpec::default(),
            status: DeliveryStatus::default(),
        }
    }

    /// Set the spec generation.
    pub fn with_generation(mut self, generation: i64) -> Self {
        self.generation = generation;
        self
    }

    /// Append a resource to the spec.
    pub fn with_resource(mut self, resource: DeliveryResource) -> Self {
        self.spec.resources.push(resource);
        self
    }
}
