//! Human-readable text formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::search::binding::{HostResult, HostSuggestion};

/// Text formatter - one line per entry
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "One line per entry"
    }

    fn format_suggestions(&self, suggestions: &[HostSuggestion]) -> Result<String> {
        if suggestions.is_empty() {
            return Ok("No suggestions".to_string());
        }
        Ok(suggestions
            .iter()
            .map(|s| format!("{:>2}. {}", s.key, s.text))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn format_results(&self, results: &[HostResult]) -> Result<String> {
        if results.is_empty() {
            return Ok("No results".to_string());
        }
        Ok(results
            .iter()
            .map(|r| {
                let score = r
                    .feature
                    .attributes
                    .get("score")
                    .and_then(|v| v.as_f64())
                    .map(|s| format!(" (score {:.2})", s))
                    .unwrap_or_default();
                format!("{} [{}]{}", r.name, r.feature.geometry, score)
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
