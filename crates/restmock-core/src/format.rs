//! Display labels for method codes.
//!
//! Each lookup echoes the input code when it is not in its table, so codes
//! introduced by newer servers still render.

use crate::types::codes::{MethodStatus, ResponseStrategy, StrategyCode};

type LabelTable = &'static [(&'static str, &'static str)];

const METHOD_STATUS_LABELS: LabelTable = &[
    ("MOCKED", "Mocked"),
    ("DISABLED", "Disabled"),
    ("FORWARDED", "Forwarded"),
    ("RECORDING", "Recording"),
    ("RECORD_ONCE", "Record once"),
    ("ECHO", "Echo"),
];

const STRATEGY_LABELS: LabelTable = &[
    ("RANDOM", "Random"),
    ("SEQUENCE", "Sequence"),
    ("XPATH", "XPath"),
    ("JSON_PATH", "JSON Path"),
    ("QUERY_MATCH", "Parameter query match"),
    ("HEADER_QUERY_MATCH", "Header query match"),
];

const MULTIPLE_STRATEGY: (&str, &str) = ("MULTIPLE", "Multiple strategies (AND)");

const DEFINITION_TYPE_LABELS: LabelTable = &[
    ("SWAGGER", "Swagger"),
    ("WADL", "WADL"),
    ("RAML", "RAML"),
];

const MOCK_RESPONSE_STATUS_LABELS: LabelTable = &[("ENABLED", "Enabled"), ("DISABLED", "Disabled")];

/// Label shown for an empty strategy selection
pub const NO_STRATEGIES: &str = "No strategies selected";

fn lookup<'a>(table: LabelTable, code: &'a str) -> &'a str {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map_or(code, |&(_, label)| label)
}

/// Label for a method lifecycle status code
pub fn method_status_label(status: &str) -> &str {
    lookup(METHOD_STATUS_LABELS, status)
}

/// Label for a single response strategy code, including `MULTIPLE`
pub fn response_strategy_label(strategy: &str) -> &str {
    if strategy == MULTIPLE_STRATEGY.0 {
        return MULTIPLE_STRATEGY.1;
    }
    lookup(STRATEGY_LABELS, strategy)
}

/// Labels of the selected strategies joined with ` + `.
pub fn multiple_response_strategy_label<S: AsRef<str>>(strategies: &[S]) -> String {
    if strategies.is_empty() {
        return NO_STRATEGIES.to_string();
    }
    strategies
        .iter()
        .map(|s| lookup(STRATEGY_LABELS, s.as_ref()))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Label for an API definition type code
pub fn definition_type_label(definition_type: &str) -> &str {
    lookup(DEFINITION_TYPE_LABELS, definition_type)
}

/// Label for a mock response status code
pub fn mock_response_status_label(status: &str) -> &str {
    lookup(MOCK_RESPONSE_STATUS_LABELS, status)
}

impl MethodStatus {
    pub fn label(&self) -> &str {
        method_status_label(self.as_str())
    }
}

impl StrategyCode {
    pub fn label(&self) -> &str {
        lookup(STRATEGY_LABELS, self.as_str())
    }
}

impl ResponseStrategy {
    pub fn label(&self) -> &str {
        response_strategy_label(self.as_str())
    }
}
