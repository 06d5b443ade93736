//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Operator declined a confirmation prompt
pub const ABORTED: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error (invalid alias name, remote id or option)
pub const DATAERR: i32 = 65;

/// Cannot open input (unknown alias)
pub const NOINPUT: i32 = 66;

/// Service unavailable
pub const UNAVAILABLE: i32 = 69;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
