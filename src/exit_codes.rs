//! Exit code constants for the prun CLI.
//!
//! - 0: Success
//! - 1: User error (unresolved prompt, bad input, missing variables)
//! - 2: Requirement failure (command, environment or directory check)
//! - 3: External tool failure (could not be started)
//!
//! When the external tool runs, its own exit code is passed through.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: unresolved prompt, unsupported format, malformed input,
/// missing variables, or unreadable files.
pub const USER_ERROR: i32 = 1;

/// A declared requirement is not satisfied by the host.
pub const REQUIREMENT_FAILURE: i32 = 2;

/// The external tool could not be started.
pub const TOOL_FAILURE: i32 = 3;
