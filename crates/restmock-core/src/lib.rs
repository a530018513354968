//! Core library for administering REST mock methods.
//!
//! - [`types`]: wire types for methods, strategies and the compound method key
//! - [`format`]: display labels for status and strategy codes
//! - [`form`]: the editable method draft and the controller driving load/save
//! - [`api`]: the remote method API and its HTTP implementation
//! - [`config`]: client configuration loading
//! - [`view`]: plain-text rendering of the update form

pub mod api;
pub mod config;
pub mod form;
pub mod format;
pub mod types;
pub mod view;
