//! Remote method API.
//!
//! [`MethodApi`] is the seam the form controller talks to; [`HttpMethodApi`]
//! implements it over HTTP against the mock server's REST endpoints.

pub mod error;
pub mod http;

pub use error::ApiError;
pub use http::HttpMethodApi;

use crate::types::key::MethodKey;
use crate::types::method::{MethodDraft, MethodRecord};
use async_trait::async_trait;

/// Read and update access to a single method resource
#[async_trait]
pub trait MethodApi: Send + Sync {
    /// Fetch the method record together with its mock response references.
    async fn get_method(&self, key: &MethodKey) -> Result<MethodRecord, ApiError>;

    /// Replace the method with the given draft. The response body is ignored.
    async fn update_method(&self, key: &MethodKey, draft: &MethodDraft) -> Result<(), ApiError>;
}

#[async_trait]
impl<T: MethodApi + ?Sized> MethodApi for std::sync::Arc<T> {
    async fn get_method(&self, key: &MethodKey) -> Result<MethodRecord, ApiError> {
        (**self).get_method(key).await
    }

    async fn update_method(&self, key: &MethodKey, draft: &MethodDraft) -> Result<(), ApiError> {
        (**self).update_method(key, draft).await
    }
}
