//! Compound key addressing a method on the mock server.

use std::fmt;

/// Identifies a method by its project, application, resource and method ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodKey {
    pub project_id: String,
    pub application_id: String,
    pub resource_id: String,
    pub method_id: String,
}

impl MethodKey {
    pub fn new(
        project_id: impl Into<String>,
        application_id: impl Into<String>,
        resource_id: impl Into<String>,
        method_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            application_id: application_id.into(),
            resource_id: resource_id.into(),
            method_id: method_id.into(),
        }
    }

    /// REST path of the method resource, without any base path prefix.
    ///
    /// Each identifier is percent-encoded as a single path segment.
    pub fn path(&self) -> String {
        format!(
            "/api/rest/rest/project/{}/application/{}/resource/{}/method/{}",
            urlencoding::encode(&self.project_id),
            urlencoding::encode(&self.application_id),
            urlencoding::encode(&self.resource_id),
            urlencoding::encode(&self.method_id),
        )
    }
}

impl fmt::Display for MethodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.project_id, self.application_id, self.resource_id, self.method_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_method_key_path() {
        let key = MethodKey::new("p1", "a1", "r1", "m1");
        assert_eq!(
            key.path(),
            "/api/rest/rest/project/p1/application/a1/resource/r1/method/m1"
        );
    }

    #[rstest]
    #[case("with space", "with%20space")]
    #[case("a/b", "a%2Fb")]
    #[case("plain-ID_1", "plain-ID_1")]
    fn test_method_key_path_encodes_segments(#[case] id: &str, #[case] encoded: &str) {
        let key = MethodKey::new("p", "a", "r", id);
        assert!(key.path().ends_with(&format!("/method/{}", encoded)));
    }

    #[rstest]
    fn test_method_key_display() {
        let key = MethodKey::new("p", "a", "r", "m");
        assert_eq!(key.to_string(), "p/a/r/m");
    }
}
