//! # fixbroken Architecture
//!
//! fixbroken reconciles the file records a Mosaic project holds for its samples
//! with the files that actually sit on the shared project filesystem, and
//! repoints records whose file has moved.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, sets up logging, prints the summary    │
//! │  - The ONLY place that knows about stdout/exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - FixApi<S: SampleService>, dispatches to commands         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/)                                  │
//! │  - reconcile: sample loop, check: per-record decision       │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  locate.rs                   │ │  service/                  │
//! │  expected paths, file probes │ │  SampleService trait,      │
//! │                              │ │  HttpService, InMemory     │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! ## Reconciliation
//!
//! For every record the expected location comes from the project layout
//! (`Data/PolishedBams/` for CRAM/CRAI, the single `*.vcf.gz[.tbi]` in
//! `VCF/Complete/` for VCF/TBI). A record is broken when its `uri` no longer
//! resolves, or, under the default metadata policy, when size, name or
//! nickname disagree with the disk. Broken records whose expected file exists
//! get one update; the rest are reported as irreparable.
//!
//! Processing is strictly sequential. A failure on one record or one sample
//! is logged and the run moves on.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Project loop and per-record checks
//! - [`locate`]: Expected-location resolution
//! - [`service`]: Remote service abstraction and implementations
//! - [`model`]: Samples, file records, updates, comparisons
//! - [`config`]: Run configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod locate;
pub mod model;
pub mod service;

#[cfg(test)]
mod test_utils;
