//! Inbound request payloads and their validation.

pub mod contacts;
