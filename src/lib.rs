//! release-notes - release notes links for Swift package dependency updates
//!
//! This library provides the core functionality for turning the output of
//! `swift package update` into release note links:
//! - Parsing the update log into ordered package updates
//! - Resolving repository locations from Package.resolved
//! - Formatting the result as text, Markdown or JSON

pub mod cli;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod progress;
pub mod resolved;
pub mod runner;
