//! Method record as served by the mock server and the editable draft sent back.

use crate::types::codes::{HttpMethod, MethodStatus, ResponseStrategy, StrategyCode};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder value of the default-response selector meaning "no selection".
///
/// Distinct from an absent id: the selector reports it verbatim.
pub const NO_SELECTION: &str = "-- select an option --";

/// Set of strategies applied together (AND) when selecting a response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MultipleResponseStrategy {
    #[serde(default)]
    pub strategies: Vec<StrategyCode>,
}

/// Mock response reference used to populate the default-response selector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MockResponseRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Method record fetched from the mock server.
///
/// Decoding is lenient: missing fields fall back to their defaults, and a
/// malformed multiple response strategy reads as "no strategies". Unknown
/// codes are kept (see [`crate::types::codes`]).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MethodRecord {
    pub id: Option<String>,
    pub name: String,
    pub http_method: Option<HttpMethod>,
    pub status: Option<MethodStatus>,
    /// Legacy single strategy, kept raw so that unknown codes do not fail decoding
    pub response_strategy: Option<String>,
    #[serde(deserialize_with = "lenient_multiple_strategy")]
    pub multiple_response_strategy: Option<MultipleResponseStrategy>,
    pub forwarded_endpoint: Option<String>,
    pub simulate_network_delay: Option<bool>,
    #[serde(deserialize_with = "delay_as_string")]
    pub network_delay: String,
    pub default_mock_response_id: Option<String>,
    pub automatic_forward: Option<bool>,
    pub mock_responses: Option<Vec<MockResponseRef>>,
}

/// Editable copy of a method
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MethodDraft {
    pub name: String,
    pub http_method: Option<HttpMethod>,
    pub status: Option<MethodStatus>,
    pub response_strategy: Option<ResponseStrategy>,
    pub multiple_response_strategy: Option<MultipleResponseStrategy>,
    pub forwarded_endpoint: Option<String>,
    pub simulate_network_delay: bool,
    /// Delay in milliseconds, kept as typed by the user
    pub network_delay: String,
    pub default_mock_response_id: Option<String>,
    pub automatic_forward: bool,
}

impl MethodDraft {
    /// Automatic forwarding needs a forward target and no default response to fall back on.
    pub fn can_enable_automatic_forward(&self) -> bool {
        has_forwarded_endpoint(self.forwarded_endpoint.as_deref())
            && self
                .default_mock_response_id
                .as_deref()
                .map_or(true, |id| id == NO_SELECTION)
    }

    /// Body sent on update. The selector placeholder is sent as `null`.
    pub fn outgoing(&self) -> MethodDraft {
        let mut draft = self.clone();
        if draft.default_mock_response_id.as_deref() == Some(NO_SELECTION) {
            draft.default_mock_response_id = None;
        }
        draft
    }
}

pub(crate) fn has_forwarded_endpoint(endpoint: Option<&str>) -> bool {
    endpoint.is_some_and(|e| !e.is_empty())
}

fn lenient_multiple_strategy<'de, D>(
    deserializer: D,
) -> Result<Option<MultipleResponseStrategy>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

fn delay_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}
