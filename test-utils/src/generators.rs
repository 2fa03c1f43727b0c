//! Shared proptest generators for Vault client tests.

use proptest::prelude::*;

/// Generate secret paths: one to four slash-joined lowercase segments.
pub fn secret_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9-]{2,10}", 1..4).prop_map(|segments| segments.join("/"))
}

/// Generate Vault token strings.
pub fn token_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{24,32}".prop_map(|body| format!("hvs.{body}"))
}

/// Generate policy names.
pub fn policy_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{2,15}"
}

/// Generate lists of policy names.
pub fn policy_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(policy_name_strategy(), 0..5)
}

/// Generate IPv4 CIDR blocks.
pub fn cidr_strategy() -> impl Strategy<Value = String> {
    (0u8..=255, 0u8..=255, 0u8..=255, 0u8..=255, 0u8..=32u8)
        .prop_map(|(a, b, c, d, bits)| format!("{a}.{b}.{c}.{d}/{bits}"))
}

/// Generate lists of CIDR blocks.
pub fn cidr_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(cidr_strategy(), 0..4)
}
