//! Grundlag - headless console for the Constitutional AI retrieval backend
//!
//! This library provides the client-side state controllers (metrics polling
//! and chat query dispatch) plus the typed HTTP contract they consume.

pub mod api;
pub mod chat;
pub mod cli;
pub mod config;
pub mod logging;
pub mod metrics;
