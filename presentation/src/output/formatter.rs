//! Output formatter trait

use catalog_application::AvailableProviders;

/// Trait for formatting loaded provider catalogs
pub trait OutputFormatter {
    /// Human-readable listing
    fn format(&self, providers: &AvailableProviders) -> String;

    /// Format as JSON
    fn format_json(&self, providers: &AvailableProviders) -> String;
}
