//! Output formatters for the CLI
//!
//! Formatters render the widget-shaped records so the CLI prints exactly
//! what the host binding would hand to a search widget.

pub mod json;
pub mod text;

use crate::error::{Error, Result};
use crate::search::binding::{HostResult, HostSuggestion};

/// Information about an output format
#[derive(Debug, Clone, PartialEq)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a suggestion list
    fn format_suggestions(&self, suggestions: &[HostSuggestion]) -> Result<String>;

    /// Format a result list
    fn format_results(&self, results: &[HostResult]) -> Result<String>;
}

fn all_formatters() -> Vec<Box<dyn OutputFormatter>> {
    vec![Box::new(json::JsonFormatter), Box::new(text::TextFormatter)]
}

/// Get a formatter by name, case-insensitive
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    all_formatters()
        .into_iter()
        .find(|f| f.name().eq_ignore_ascii_case(name))
}

/// Get a formatter by name; the error lists the known formats
pub fn resolve_formatter(name: &str) -> Result<Box<dyn OutputFormatter>> {
    get_formatter(name).ok_or_else(|| {
        let known: Vec<String> = available_formats()
            .iter()
            .map(|f| format!("{} ({})", f.name, f.description))
            .collect();
        Error::Config(format!(
            "Unknown format: {}. Available formats: {}",
            name,
            known.join(", ")
        ))
    })
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    all_formatters()
        .iter()
        .map(|f| FormatInfo {
            name: f.name().to_string(),
            description: f.description().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("TEXT").is_some());
        assert!(get_formatter("gpx").is_none());
    }

    #[test]
    fn test_available_formats_resolve() {
        let formats = available_formats();
        assert_eq!(formats.len(), 2);
        for format in formats {
            let formatter = resolve_formatter(&format.name).unwrap();
            assert_eq!(formatter.name(), format.name);
            assert_eq!(formatter.description(), format.description);
        }
    }

    #[test]
    fn test_unknown_format_lists_available() {
        let err = resolve_formatter("gpx").err().unwrap();
        let Error::Config(msg) = &err else {
            panic!("expected config error, got {:?}", err);
        };
        assert!(msg.contains("Unknown format: gpx"));
        assert!(msg.contains("json (Widget-shaped JSON)"));
        assert!(msg.contains("text (One line per entry)"));
    }
}
