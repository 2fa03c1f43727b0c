//! Response envelope fixtures matching the Vault wire format.

use serde_json::{Value, json};
use uuid::Uuid;

/// A plain secret envelope around `data`.
#[must_use]
pub fn secret_envelope(data: Value) -> Value {
    json!({
        "request_id": Uuid::new_v4().to_string(),
        "lease_id": "",
        "renewable": false,
        "lease_duration": 2764800,
        "data": data,
        "wrap_info": null,
        "warnings": null,
        "auth": null
    })
}

/// A list envelope around `keys`.
#[must_use]
pub fn list_envelope(keys: &[&str]) -> Value {
    secret_envelope(json!({ "keys": keys }))
}

/// A wrapped-response envelope carrying a one-time-use wrapping token.
#[must_use]
pub fn wrapped_envelope(token: &str, ttl: u64, creation_path: &str) -> Value {
    json!({
        "request_id": "",
        "lease_id": "",
        "renewable": false,
        "lease_duration": 0,
        "data": null,
        "wrap_info": {
            "token": token,
            "ttl": ttl,
            "creation_time": "2024-05-01T12:00:00Z",
            "creation_path": creation_path
        },
        "warnings": null,
        "auth": null
    })
}

/// The cubbyhole envelope a wrapping token redeems: `inner` re-encoded
/// as a JSON string under `data.response`.
#[must_use]
pub fn cubbyhole_response_envelope(inner: &Value) -> Value {
    secret_envelope(json!({ "response": inner.to_string() }))
}

/// A login envelope with an auth block.
#[must_use]
pub fn login_envelope(client_token: &str, policies: &[&str]) -> Value {
    json!({
        "request_id": Uuid::new_v4().to_string(),
        "lease_id": "",
        "renewable": false,
        "lease_duration": 0,
        "data": null,
        "wrap_info": null,
        "warnings": null,
        "auth": {
            "client_token": client_token,
            "accessor": "accessor-test",
            "policies": policies,
            "token_policies": policies,
            "metadata": null,
            "lease_duration": 1200,
            "renewable": true
        }
    })
}

/// The documented Vault error body.
#[must_use]
pub fn error_body(errors: &[&str]) -> Value {
    json!({ "errors": errors })
}
