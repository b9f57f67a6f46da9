//! Core types for the dynoquery connector.
//!
//! This crate is host- and backend-agnostic: it defines the validated query
//! parameters, the attribute-substitution payload, the executor seam a store
//! backend implements, and the normalized result types. The DynamoDB backend
//! and the activity harness live in the `dynoquery` crate.

pub mod query;
pub mod storage;
