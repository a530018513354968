//! Controller driving the update-method form.
//!
//! This module provides `MethodFormController`, which fetches the method on
//! load, applies edits to its draft through the [`FormState`] reducer and
//! submits the draft on save.

use crate::api::{ApiError, MethodApi};
use crate::form::state::{Edit, FieldEdit, FormState};
use crate::types::codes::StrategyCode;
use crate::types::key::MethodKey;
use tracing::{debug, error};

/// Receives every failed request of the controller.
pub trait ErrorHandler: Send + Sync {
    fn handle(&self, error: &ApiError);
}

/// Logs failures and otherwise ignores them
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorHandler;

impl ErrorHandler for DefaultErrorHandler {
    fn handle(&self, error: &ApiError) {
        error!(%error, "method request failed");
    }
}

/// Called after a successful save so the owner can refresh its own copy
pub type RefreshCallback = Box<dyn FnMut() + Send>;

/// Form controller for a single method.
///
/// Holds the draft for the method identified by `key`. Failed requests are
/// passed to the error handler and returned; the draft is left untouched, so a
/// failed save can be retried as is.
pub struct MethodFormController<A> {
    key: MethodKey,
    api: A,
    state: FormState,
    error_handler: Box<dyn ErrorHandler>,
    on_saved: Option<RefreshCallback>,
}

impl<A: MethodApi> MethodFormController<A> {
    /// Create a controller with an empty draft. Call [`load`](Self::load) to populate it.
    pub fn new(key: MethodKey, api: A) -> Self {
        Self {
            key,
            api,
            state: FormState::default(),
            error_handler: Box::new(DefaultErrorHandler),
            on_saved: None,
        }
    }

    pub fn with_error_handler(mut self, handler: impl ErrorHandler + 'static) -> Self {
        self.error_handler = Box::new(handler);
        self
    }

    pub fn on_saved(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_saved = Some(Box::new(callback));
        self
    }

    pub fn key(&self) -> &MethodKey {
        &self.key
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Fetch the method and replace the form state with it.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        let record = match self.api.get_method(&self.key).await {
            Ok(record) => record,
            Err(e) => return Err(self.fail(e)),
        };
        self.state = FormState::from_record(record);
        debug!(key = %self.key, strategies = self.state.selected_strategies.len(), "method loaded");
        Ok(())
    }

    /// Apply one edit to the draft.
    pub fn edit(&mut self, edit: Edit) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(edit);
    }

    pub fn set_field(&mut self, field: FieldEdit) {
        self.edit(Edit::Field(field));
    }

    pub fn toggle_strategy(&mut self, code: StrategyCode, selected: bool) {
        self.edit(Edit::ToggleStrategy { code, selected });
    }

    pub fn can_enable_automatic_forward(&self) -> bool {
        self.state.can_enable_automatic_forward()
    }

    /// Submit the draft, then notify the owner to refresh.
    pub async fn save(&mut self) -> Result<(), ApiError> {
        if let Err(e) = self.api.update_method(&self.key, &self.state.draft).await {
            return Err(self.fail(e));
        }
        debug!(key = %self.key, "method saved");
        if let Some(callback) = self.on_saved.as_mut() {
            callback();
        }
        Ok(())
    }

    fn fail(&self, error: ApiError) -> ApiError {
        self.error_handler.handle(&error);
        error
    }
}
