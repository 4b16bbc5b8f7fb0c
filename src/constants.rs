//! Crate constants
//!
//! Centralized location for address prefixes, environment keys and defaults.

/// Address prefixes accepted by the fetch transport
pub const HTTP_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Default `User-Agent` sent with every call
pub const DEFAULT_USER_AGENT: &str = concat!("fetch-bridge/", env!("CARGO_PKG_VERSION"));

/// Default redirect limit; 0 disables following redirects
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Separator used when a response repeats a header
pub const HEADER_VALUE_SEPARATOR: &str = ", ";

pub const ENV_USER_AGENT: &str = "FETCH_BRIDGE_USER_AGENT";
pub const ENV_ACCEPT_INVALID_CERTS: &str = "FETCH_BRIDGE_ACCEPT_INVALID_CERTS";
pub const ENV_MAX_REDIRECTS: &str = "FETCH_BRIDGE_MAX_REDIRECTS";
