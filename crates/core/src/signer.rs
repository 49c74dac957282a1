//! Request signing
//!
//! Every panel call carries `request_time` (Unix seconds) and
//! `request_token = md5(request_time . md5(key))`, both digests as lowercase
//! hex. The server recomputes the token from the time it receives, so the two
//! must always travel together. MD5 is mandated by the panel's wire protocol.

use btpanel_domain::constants::{REQUEST_TIME_FIELD, REQUEST_TOKEN_FIELD};
use btpanel_domain::Params;
use md5::{Digest, Md5};

/// Token and timestamp for one outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSignature {
    pub token: String,
    pub time: i64,
}

impl RequestSignature {
    /// Append the signature fields to `params`, replacing caller values with
    /// the same names.
    pub fn apply(&self, params: &mut Params) {
        params.insert(REQUEST_TOKEN_FIELD, self.token.clone());
        params.insert(REQUEST_TIME_FIELD, self.time);
    }
}

fn md5_hex(input: &[u8]) -> String {
    hex::encode(Md5::digest(input))
}

/// Sign for an explicit Unix time. Pure.
pub fn sign(key: &str, time: i64) -> RequestSignature {
    let key_digest = md5_hex(key.as_bytes());
    let token = md5_hex(format!("{time}{key_digest}").as_bytes());
    RequestSignature { token, time }
}

/// Sign with the current wall-clock second.
pub fn sign_now(key: &str) -> RequestSignature {
    sign(key, chrono::Utc::now().timestamp())
}
