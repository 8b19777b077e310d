//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::api::ADRESSE_URL;

/// Default address API base URL
pub const DEFAULT_BASE_URL: &str = ADRESSE_URL;

/// Maximum suggestions requested per keystroke (the provider's own cap)
pub const DEFAULT_SUGGESTION_LIMIT: usize = 6;

/// Maximum results requested per forward search
pub const DEFAULT_RESULT_LIMIT: usize = 6;

/// Radius of the buffer used as a result's zoom extent, in meters
pub const DEFAULT_BUFFER_METERS: f64 = 100.0;

/// Search box placeholder text
pub const DEFAULT_PLACEHOLDER: &str = "example: 8 Boulevard du Port";

/// Initial map center longitude (mainland France)
pub const DEFAULT_CENTER_LON: f64 = 2.21;

/// Initial map center latitude (mainland France)
pub const DEFAULT_CENTER_LAT: f64 = 46.22;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7878;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "adresse-search";
