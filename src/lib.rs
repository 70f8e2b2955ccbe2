//! Activity data model for the Improv Index catalog.
//!
//! This crate implements the catalog's core record - one improvisational
//! theater activity - together with the rules that make a record
//! well-formed and a collection of records consistent:
//!
//! - **Taxonomy**: closed vocabularies for type, field, tags, skills,
//!   and the graded scales (level, complexity, skill ceiling,
//!   physicality, vocality), with grading backed by declared ordinals.
//! - **Entity**: the [`Activity`] record with its nested requirement
//!   ranges and tips.
//! - **Validation**: complete, never-fatal violation reports, per record
//!   and across a collection (id uniqueness, parent/variant symmetry,
//!   reference existence, acyclic parent chains).
//! - **Catalog**: a minimal in-memory id index with reference
//!   resolution.
//!
//! # Key Components
//!
//! - [`Activity`] / [`ActivityBuilder`]: the record and its well-formed
//!   construction path
//! - [`validate_activity`] / [`validate_collection`]: per-field and
//!   relational checks
//! - [`ActivityCatalog`]: id-keyed collection with variant/parent
//!   resolution
//! - [`example_activity`]: canonical seed record for demos and tests
//!
//! # Example
//!
//! ```ignore
//! use improv_catalog::{example_activity, validate_activity, ActivityCatalog};
//!
//! let mut catalog = ActivityCatalog::new();
//! let activity = example_activity();
//! assert!(validate_activity(&activity).is_valid());
//!
//! catalog.insert(activity)?;
//! let report = catalog.validate();
//! assert!(report.is_valid());
//! ```
//!
//! The model is synchronous and performs no I/O; a concurrent host
//! treats a catalog as one shared resource behind its own reader/writer
//! lock. With the `typescript` feature enabled, all model types export
//! to TypeScript via ts-rs for the Angular frontend.

pub mod activity;
pub mod catalog;
pub mod example;
pub mod types;
pub mod validate;

// Re-export main types
pub use activity::{
    Activity, ActivityBuilder, ActivityRequirements, ActivityTips, DurationRequirement,
    PhysicalityRequirement, PlayerRequirement, VocalityRequirement,
};
pub use catalog::{ActivityCatalog, CatalogError};
pub use example::example_activity;
pub use types::{
    ActivityComplexity, ActivityField, ActivityLevel, ActivitySkill, ActivitySkillCeiling,
    ActivityTag, ActivityType, PhysicalityLevel, VocalityLevel,
};
pub use validate::{
    validate_activity, validate_collection, ValidationResult, Violation, ViolationKind,
};
