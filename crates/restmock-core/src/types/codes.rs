//! Code sets exchanged with the mock server.
//!
//! Every code serializes as its upper-snake wire form (`RECORD_ONCE`, `JSON_PATH`, ...).
//! Decoding never fails on a code this version does not know: it is kept as
//! `Other` and written back unchanged. Parsing with `FromStr` stays strict.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A wire code that does not belong to the expected code set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} code: {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: String,
}

macro_rules! wire_codes {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($variant:ident => $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            /// Code unknown to this version, kept verbatim
            Other(String),
        }

        impl $name {
            /// All known codes in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire code
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $code,)+
                    $name::Other(code) => code,
                }
            }

            /// Decode a wire code, keeping unknown codes as `Other`.
            pub fn from_wire(code: &str) -> Self {
                match code.parse() {
                    Ok(known) => known,
                    Err(_) => $name::Other(code.to_string()),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok($name::$variant),)+
                    other => Err(UnknownCode {
                        kind: $kind,
                        code: other.to_string(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = String::deserialize(deserializer)?;
                Ok($name::from_wire(&code))
            }
        }
    };
}

wire_codes! {
    /// HTTP method a mocked method answers to
    HttpMethod ("HTTP method") {
        Get => "GET",
        Post => "POST",
        Put => "PUT",
        Head => "HEAD",
        Delete => "DELETE",
        Options => "OPTIONS",
        Trace => "TRACE",
        Patch => "PATCH",
    }
}

wire_codes! {
    /// Lifecycle status of a mocked method
    MethodStatus ("method status") {
        Mocked => "MOCKED",
        Disabled => "DISABLED",
        Forwarded => "FORWARDED",
        Recording => "RECORDING",
        RecordOnce => "RECORD_ONCE",
        Echo => "ECHO",
    }
}

wire_codes! {
    /// Response selection algorithm that can be combined with others
    StrategyCode ("response strategy") {
        Random => "RANDOM",
        Sequence => "SEQUENCE",
        Xpath => "XPATH",
        JsonPath => "JSON_PATH",
        QueryMatch => "QUERY_MATCH",
        HeaderQueryMatch => "HEADER_QUERY_MATCH",
    }
}

wire_codes! {
    /// Legacy single response strategy field.
    ///
    /// `Multiple` means the strategies listed in the multiple response strategy apply together.
    ResponseStrategy ("response strategy") {
        Random => "RANDOM",
        Sequence => "SEQUENCE",
        Xpath => "XPATH",
        JsonPath => "JSON_PATH",
        QueryMatch => "QUERY_MATCH",
        HeaderQueryMatch => "HEADER_QUERY_MATCH",
        Multiple => "MULTIPLE",
    }
}

impl From<StrategyCode> for ResponseStrategy {
    fn from(code: StrategyCode) -> Self {
        match code {
            StrategyCode::Random => ResponseStrategy::Random,
            StrategyCode::Sequence => ResponseStrategy::Sequence,
            StrategyCode::Xpath => ResponseStrategy::Xpath,
            StrategyCode::JsonPath => ResponseStrategy::JsonPath,
            StrategyCode::QueryMatch => ResponseStrategy::QueryMatch,
            StrategyCode::HeaderQueryMatch => ResponseStrategy::HeaderQueryMatch,
            StrategyCode::Other(code) => ResponseStrategy::Other(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("GET", HttpMethod::Get)]
    #[case("OPTIONS", HttpMethod::Options)]
    #[case("TRACE", HttpMethod::Trace)]
    #[case("PATCH", HttpMethod::Patch)]
    fn test_http_method_from_str(#[case] code: &str, #[case] expected: HttpMethod) {
        assert_eq!(code.parse::<HttpMethod>(), Ok(expected.clone()));
        assert_eq!(expected.as_str(), code);
    }

    #[rstest]
    #[case("get")]
    #[case("CONNECT")]
    #[case("")]
    fn test_http_method_rejects_unknown(#[case] code: &str) {
        let err = code.parse::<HttpMethod>().unwrap_err();
        assert_eq!(err.code, code);
        assert!(err.to_string().contains("HTTP method"));
    }

    #[rstest]
    #[case(MethodStatus::RecordOnce, "\"RECORD_ONCE\"")]
    #[case(MethodStatus::Echo, "\"ECHO\"")]
    fn test_method_status_wire_form(#[case] status: MethodStatus, #[case] json: &str) {
        assert_eq!(serde_json::to_string(&status).unwrap(), json);
        let parsed: MethodStatus = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, status);
    }

    #[rstest]
    fn test_strategy_code_wire_form() {
        let json = serde_json::to_string(&[StrategyCode::JsonPath, StrategyCode::HeaderQueryMatch])
            .unwrap();
        assert_eq!(json, r#"["JSON_PATH","HEADER_QUERY_MATCH"]"#);
    }

    #[rstest]
    fn test_every_strategy_code_maps_to_same_response_strategy() {
        for code in StrategyCode::ALL {
            let strategy = ResponseStrategy::from(code.clone());
            assert_eq!(strategy.as_str(), code.as_str());
        }
        assert_eq!(ResponseStrategy::ALL.len(), StrategyCode::ALL.len() + 1);
    }

    #[rstest]
    #[case("\"PAUSED\"", MethodStatus::Other("PAUSED".to_string()))]
    #[case("\"ECHO\"", MethodStatus::Echo)]
    fn test_method_status_decodes_unknown_code(
        #[case] json: &str,
        #[case] expected: MethodStatus,
    ) {
        let status: MethodStatus = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(status, expected);
        assert_eq!(serde_json::to_string(&status).unwrap(), json);
    }

    #[rstest]
    fn test_strategy_list_keeps_unknown_codes_in_place() {
        let codes: Vec<StrategyCode> =
            serde_json::from_str(r#"["RANDOM","FUTURE_CODE","XPATH"]"#).unwrap();
        assert_eq!(
            codes,
            vec![
                StrategyCode::Random,
                StrategyCode::Other("FUTURE_CODE".to_string()),
                StrategyCode::Xpath
            ]
        );
        assert!(!codes[1].is_known());
        assert_eq!(
            serde_json::to_string(&codes).unwrap(),
            r#"["RANDOM","FUTURE_CODE","XPATH"]"#
        );
    }

    #[rstest]
    #[case("TRACE", HttpMethod::Trace)]
    #[case("CONNECT", HttpMethod::Other("CONNECT".to_string()))]
    fn test_from_wire(#[case] code: &str, #[case] expected: HttpMethod) {
        assert_eq!(HttpMethod::from_wire(code), expected);
        assert_eq!(expected.as_str(), code);
    }

    #[rstest]
    fn test_from_str_rejects_other_spelled_code() {
        assert!("FUTURE_CODE".parse::<StrategyCode>().is_err());
    }

    #[rstest]
    fn test_multiple_is_not_a_strategy_code() {
        assert!("MULTIPLE".parse::<StrategyCode>().is_err());
        assert_eq!(
            "MULTIPLE".parse::<ResponseStrategy>(),
            Ok(ResponseStrategy::Multiple)
        );
    }
}
