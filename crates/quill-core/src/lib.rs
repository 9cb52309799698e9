//! # quill-core
//!
//! Core types, ID prefixes, and error types for Quill.
//!
//! This crate provides the foundational types shared across all Quill crates:
//! - Entity structs for tasks, drafts, and suggested subtasks
//! - Priority and status enums
//! - ID prefix constants
//! - Cross-cutting error types
//! - The `TaskStore` contract implemented by storage backends
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod responses;
pub mod store;
