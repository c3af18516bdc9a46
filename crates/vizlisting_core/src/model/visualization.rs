//! Visualization domain model.
//!
//! # Responsibility
//! - Define the canonical record shown on the listing page.
//! - Provide validated constructors so invalid records never exist.
//!
//! # Invariants
//! - `uuid` is stable, non-nil, and never reused for another visualization.
//! - `name` is non-empty after trimming; original casing and spacing are
//!   preserved exactly as the user typed them.
//! - `created_at` is the listing order key and never changes after creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every visualization in the listing.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type VizId = Uuid;

/// Editor type used to author a visualization.
///
/// The listing treats all types uniformly; the type only matters to the
/// editor that opens the saved object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VizType {
    /// Free-form markdown widget.
    Markdown,
    /// Single-value metric display.
    Metric,
    /// Tabular data display.
    Table,
}

/// Validation failure for visualization construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VizValidationError {
    /// Identity must be a real v4 UUID, never the nil placeholder.
    NilUuid,
    /// Name was empty or whitespace-only.
    EmptyName,
}

impl Display for VizValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "visualization uuid cannot be nil"),
            Self::EmptyName => {
                write!(f, "visualization name cannot be empty or whitespace-only")
            }
        }
    }
}

impl Error for VizValidationError {}

/// Canonical record for a saved visualization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visualization {
    /// Stable global ID used for linking and deletion.
    pub uuid: VizId,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: VizType,
    /// User-chosen display name. Free text, searched by the listing page.
    pub name: String,
    /// Unix epoch milliseconds at creation; stable listing order key.
    pub created_at: i64,
}

impl Visualization {
    /// Creates a new visualization with a generated stable ID and the
    /// current creation timestamp.
    ///
    /// # Errors
    /// - `VizValidationError::EmptyName` when `name` trims to nothing.
    pub fn new(kind: VizType, name: impl Into<String>) -> Result<Self, VizValidationError> {
        Self::with_id(Uuid::new_v4(), kind, name)
    }

    /// Creates a visualization with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    ///
    /// # Errors
    /// - `VizValidationError::NilUuid` when `uuid` is nil.
    /// - `VizValidationError::EmptyName` when `name` trims to nothing.
    pub fn with_id(
        uuid: VizId,
        kind: VizType,
        name: impl Into<String>,
    ) -> Result<Self, VizValidationError> {
        let viz = Self {
            uuid,
            kind,
            name: name.into(),
            created_at: now_epoch_ms(),
        };
        viz.validate()?;
        Ok(viz)
    }

    /// Checks record-level invariants.
    ///
    /// Write paths must call this before persistence; read paths use it to
    /// reject corrupt persisted state instead of masking it.
    pub fn validate(&self) -> Result<(), VizValidationError> {
        if self.uuid.is_nil() {
            return Err(VizValidationError::NilUuid);
        }
        if self.name.trim().is_empty() {
            return Err(VizValidationError::EmptyName);
        }
        Ok(())
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
