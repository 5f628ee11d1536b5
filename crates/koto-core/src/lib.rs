//! # koto-core
//!
//! Core types, ID generation, and error types for hitokoto.
//!
//! This crate provides the foundational types shared across all hitokoto crates:
//! - Entity structs for the domain objects (job postings, events, display settings)
//! - Media and status enums
//! - The fixed 10-slot section collection
//! - Rich-text markup tag helpers
//! - Random ID formatting helpers
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod markup;
pub mod sections;
