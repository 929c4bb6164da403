//! Data Transfer Objects for the ReadTheDocs builds endpoint

pub mod build;
