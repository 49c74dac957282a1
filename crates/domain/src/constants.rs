//! Panel client constants
//!
//! Wire field names and defaults shared by the signer, transport and
//! resource catalogs.

// Signature fields appended to every request body
pub const REQUEST_TOKEN_FIELD: &str = "request_token";
pub const REQUEST_TIME_FIELD: &str = "request_time";

// Session persistence
pub const SESSION_SUBDIR: &str = "bt";
pub const COOKIE_FILE_EXTENSION: &str = "cookie";
pub const DEFAULT_SESSION_DIR: &str = "btpanel-sessions";

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

// Upload multipart layout
pub const UPLOAD_BLOB_FIELD: &str = "blob";
pub const UPLOAD_BLOB_FILE_NAME: &str = "blob";
