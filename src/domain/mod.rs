//! Domain modules organized as vertical slices.
//!
//! A sub-module contains some of:
//! - `mod.rs` — Rich domain types
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — Conversions from wire payloads into domain types
//! - `client.rs` — Sub-client with HTTP methods

pub mod history;
pub mod price;
