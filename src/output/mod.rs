//! Artifact writers.
//!
//! Three artifact shapes come out of an export:
//!
//! - [`json::to_json`]: the clear `{meta, conversation}` record
//! - [`json::to_compressed_json`]: the `{meta, compressedContent, note}`
//!   record with the conversation run through the dictionary codec
//! - [`html::render`]: a self-contained styled page for human reading
//!
//! Each renderer has a `to_*`/`render` form returning a `String` and a
//! `write_*` form that delivers to a path, failing with
//! [`ChatliftError::Delivery`](crate::ChatliftError::Delivery).

pub mod html;
pub mod json;
