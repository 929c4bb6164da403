//! Core domain types
//!
//! Entities returned by the ReadTheDocs v3 API. Only the fields the waiter
//! reports on are modelled; everything else in the payload is ignored.

pub mod build;
