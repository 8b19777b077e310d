//! Centralized constants for the adresse-search crate

/// External API endpoints
pub mod api {
    /// Open address search API for France (Base Adresse Nationale)
    pub const ADRESSE_URL: &str = "https://api-adresse.data.gouv.fr/";

    /// Forward and suggestion search path, relative to the base URL
    pub const SEARCH_PATH: &str = "search/";

    /// Reverse geocoding path, relative to the base URL
    pub const REVERSE_PATH: &str = "reverse/";

    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("adresse-search/", env!("CARGO_PKG_VERSION"));
}
