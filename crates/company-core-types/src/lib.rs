//! Core types shared across the company store facilities
//!
//! Holds the canonical field keys and event names used by the logging
//! facility so that every crate emits the same structured schema.

pub mod schema;
