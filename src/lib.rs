//! # leadfunnel
//!
//! Headless engine for a lead-qualification quiz funnel: a fixed
//! six-question quiz about financial operations, a deterministic scoring and
//! routing engine, industry-specific content selection, session persistence
//! with a 30-day window, and validated lead submission to a
//! spreadsheet-backed webhook.
//!
//! ## Modules
//!
//! - `quiz` - Question catalog, semantic tags, and per-session quiz state
//! - `routing` - Pure scoring/routing engine and the results query contract
//! - `content` - Industry-specific content bundles
//! - `session` - Session persistence and return-visitor detection
//! - `storage` - Injected key-value store abstraction (file and in-memory)
//! - `attribution` - UTM and click-id capture
//! - `validate` - Email validation, disposable-domain deny-list, honeypot
//! - `submit` - Two-phase webhook submission with rate limit and outbox
//! - `analytics` - Funnel event dispatch
//! - `config` - TOML + environment configuration

pub mod analytics;
pub mod attribution;
pub mod config;
pub mod content;
pub mod error;
pub mod quiz;
pub mod routing;
pub mod session;
pub mod storage;
pub mod submit;
pub mod validate;

pub use error::{Error, Result};
