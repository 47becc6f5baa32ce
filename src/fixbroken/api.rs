//! # API Facade
//!
//! Thin entry point over the command layer. [`FixApi`] owns the service and
//! the run configuration and dispatches to `commands/`; it does no printing
//! and no business logic of its own.
//!
//! `FixApi<S: SampleService>` is generic over the remote side:
//! - Production: `FixApi<HttpService>`
//! - Testing: `FixApi<InMemoryService>`

use crate::commands::{self, ReconcileReport};
use crate::config::ReconcileConfig;
use crate::error::Result;
use crate::service::SampleService;

pub struct FixApi<S: SampleService> {
    service: S,
    config: ReconcileConfig,
}

impl<S: SampleService> FixApi<S> {
    pub fn new(service: S, config: ReconcileConfig) -> Self {
        Self { service, config }
    }

    /// Reconcile the whole project (subject to the sample filter and limit).
    pub fn reconcile(&mut self) -> Result<ReconcileReport> {
        commands::reconcile::run(&mut self.service, &self.config)
    }

    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}
