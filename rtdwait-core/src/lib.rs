//! rtdwait Core
//!
//! Core types shared by the ReadTheDocs client and the `rtdwait` binary.
//!
//! This crate contains:
//! - Domain types: build records as reported by the ReadTheDocs API
//! - DTOs: request filters and paginated responses for the builds endpoint

pub mod domain;
pub mod dto;
