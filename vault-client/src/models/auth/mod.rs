//! Request and response models for Vault authentication backends.

pub mod approle;
pub mod token;
pub mod userpass;
