//! Core domain types for mocked REST methods.

pub mod codes;
pub mod key;
pub mod method;
