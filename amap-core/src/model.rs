use serde_json::Value;

use crate::error::Error;

/// Report detail level understood by the upstream API.
///
/// `Base` is current conditions only, `All` includes the forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extensions {
    Base,
    All,
}

impl Extensions {
    pub fn as_str(&self) -> &'static str {
        match self {
            Extensions::Base => "base",
            Extensions::All => "all",
        }
    }

    pub const fn all() -> &'static [Extensions] {
        &[Extensions::Base, Extensions::All]
    }
}

impl std::fmt::Display for Extensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Extensions {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "base" => Ok(Extensions::Base),
            "all" => Ok(Extensions::All),
            _ => Err(Error::InvalidArgument(format!(
                "Invalid type value(base/all): {value}"
            ))),
        }
    }
}

/// Serialization format requested from upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Output {
    Json,
    Xml,
}

impl Output {
    pub fn as_str(&self) -> &'static str {
        match self {
            Output::Json => "json",
            Output::Xml => "xml",
        }
    }

    pub const fn all() -> &'static [Output] {
        &[Output::Json, Output::Xml]
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Output {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "json" => Ok(Output::Json),
            "xml" => Ok(Output::Xml),
            _ => Err(Error::InvalidArgument(format!(
                "Invalid response format(json/xml): {value}"
            ))),
        }
    }
}

/// Decoded upstream response: a JSON mapping or the raw XML body.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherReport {
    Json(Value),
    Xml(String),
}

impl WeatherReport {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            WeatherReport::Json(value) => Some(value),
            WeatherReport::Xml(_) => None,
        }
    }

    pub fn as_xml(&self) -> Option<&str> {
        match self {
            WeatherReport::Json(_) => None,
            WeatherReport::Xml(raw) => Some(raw.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_as_str_roundtrip() {
        for ext in Extensions::all() {
            let parsed = Extensions::try_from(ext.as_str()).expect("roundtrip should succeed");
            assert_eq!(*ext, parsed);
        }
    }

    #[test]
    fn extensions_parse_is_case_insensitive() {
        assert_eq!(Extensions::try_from("Base").unwrap(), Extensions::Base);
        assert_eq!(Extensions::try_from("ALL").unwrap(), Extensions::All);
    }

    #[test]
    fn unknown_extensions_error_message() {
        let err = Extensions::try_from("foo").unwrap_err();
        assert_eq!(err.to_string(), "Invalid type value(base/all): foo");
    }

    #[test]
    fn output_as_str_roundtrip() {
        for output in Output::all() {
            let parsed = Output::try_from(output.as_str()).expect("roundtrip should succeed");
            assert_eq!(*output, parsed);
        }
    }

    #[test]
    fn output_parse_is_case_insensitive() {
        assert_eq!(Output::try_from("JSON").unwrap(), Output::Json);
        assert_eq!(Output::try_from("Xml").unwrap(), Output::Xml);
    }

    #[test]
    fn unknown_output_error_message() {
        let err = Output::try_from("array").unwrap_err();
        assert_eq!(err.to_string(), "Invalid response format(json/xml): array");
    }

    #[test]
    fn report_accessors() {
        let json = WeatherReport::Json(serde_json::json!({"success": true}));
        assert!(json.as_json().is_some());
        assert!(json.as_xml().is_none());

        let xml = WeatherReport::Xml("<hello>content</hello>".to_string());
        assert_eq!(xml.as_xml(), Some("<hello>content</hello>"));
        assert!(xml.as_json().is_none());
    }
}
