//! Serde helpers for Vault's wire quirks.

/// Serde adapter for fields Vault carries as a comma-separated string
/// but that callers want as a list.
///
/// Serializes a `Vec<String>` by joining with `,`; deserializes by
/// splitting on `,`, trimming whitespace and dropping empty segments.
///
/// Use with `#[serde(with = "csv_string")]`.
pub mod csv_string {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize a list as a single comma-joined string.
    pub fn serialize<S>(list: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&list.join(","))
    }

    /// Deserialize a comma-separated string into a list.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(split_csv(&raw))
    }

    pub(crate) fn split_csv(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}
