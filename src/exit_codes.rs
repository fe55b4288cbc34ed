//! Exit code constants for the trunkcfg CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable file, no config found)
//! - 2: Parse failure (malformed YAML)
//! - 3: Validation failure (missing or malformed field)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable file, or config path not found.
pub const USER_ERROR: i32 = 1;

/// Parse failure: the document is not well-formed YAML or has the wrong shape.
pub const PARSE_FAILURE: i32 = 2;

/// Validation failure: a required field is missing or a value is malformed.
pub const VALIDATION_FAILURE: i32 = 3;
