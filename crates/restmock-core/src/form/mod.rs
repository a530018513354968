//! Update-method form.
//!
//! - [`FormState`]: the draft plus selector data, updated by a pure reducer
//! - [`MethodFormController`]: owns a `FormState` and drives load/save against a [`MethodApi`](crate::api::MethodApi)

pub mod controller;
pub mod state;

pub use controller::{DefaultErrorHandler, ErrorHandler, MethodFormController};
pub use state::{Edit, FieldEdit, FormState};
