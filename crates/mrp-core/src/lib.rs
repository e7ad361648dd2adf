//! # mrp-core
//!
//! Core types for the Market Research Protocol tracker.
//!
//! This crate provides the foundational types shared across all MRP crates:
//! - Entity structs for the four domain objects (projects, runs, steps, sources)
//! - Status and classification enums with snake_case serialization
//! - The immutable 19-step protocol catalog
//! - ID prefix constants
//! - Derived progress read-models

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod ids;
pub mod progress;
