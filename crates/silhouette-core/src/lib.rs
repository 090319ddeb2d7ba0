//! Silhouette Core - Foundational types for the Silhouette simulation
//!
//! This crate provides the core types that all other Silhouette crates depend on:
//! - `ParticleId` - Process-wide particle identity
//! - `Rect` - Axis-aligned bounds that can never invert
//! - `SpawnMode` - The interaction mode governing particle creation
//! - Error types and Result alias

mod error;
mod id;
mod types;

pub use error::{Result, SilhouetteError};
pub use id::ParticleId;
pub use types::{Rect, SpawnMode};
