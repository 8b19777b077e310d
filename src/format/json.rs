//! JSON output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::search::binding::{HostResult, HostSuggestion};

/// JSON formatter - pretty-printed widget records
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Widget-shaped JSON"
    }

    fn format_suggestions(&self, suggestions: &[HostSuggestion]) -> Result<String> {
        Ok(serde_json::to_string_pretty(suggestions)?)
    }

    fn format_results(&self, results: &[HostResult]) -> Result<String> {
        Ok(serde_json::to_string_pretty(results)?)
    }
}
