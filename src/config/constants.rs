//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Service Identity
// =============================================================================

/// Human-readable service name, reported by `/` and `/health`
pub const SERVICE_NAME: &str = "User Store API";

/// Public API version string
pub const API_VERSION: &str = "1.0.0";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address (all interfaces)
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;
