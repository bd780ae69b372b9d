//! Outbound adapters implementing the domain ports.

pub mod document;
pub mod storage;
