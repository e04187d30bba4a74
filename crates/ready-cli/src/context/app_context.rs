use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use ready_config::ReadyConfig;
use ready_core::{Catalog, Environment, Quiz, VerdictLadder};
use ready_store::{DirBackend, QuizStore};
use ready_submit::{HttpTransport, SubmissionGateway};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: ReadyConfig,
    pub catalog: Catalog,
    pub ladder: VerdictLadder,
    pub store: QuizStore<DirBackend>,
    pub store_dir: PathBuf,
    pub page_url: String,
}

impl AppContext {
    /// `--store` and `--url` override the configured values.
    pub fn init(config: ReadyConfig, flags: &GlobalFlags) -> Self {
        let store_dir = flags
            .store
            .as_deref()
            .map_or_else(|| config.store.resolve_dir(), PathBuf::from);
        let page_url = flags
            .url
            .clone()
            .unwrap_or_else(|| config.links.page_url.clone());

        Self {
            store: QuizStore::open_dir(store_dir.clone()),
            store_dir,
            page_url,
            catalog: Catalog::standard(),
            ladder: VerdictLadder::standard(),
            config,
        }
    }

    /// The checklist restored from the store, persisting back into it.
    pub fn quiz(&mut self) -> Quiz<&mut QuizStore<DirBackend>> {
        let state = self.store.restore();
        Quiz::new(self.catalog, state, &mut self.store)
    }

    /// Clock and page URL as of now.
    pub fn environment(&self) -> Environment {
        Environment::capture(self.page_url.clone())
    }

    /// Forwarding gateway when a webhook is configured, demo gateway otherwise.
    pub fn gateway(&self) -> anyhow::Result<SubmissionGateway<HttpTransport>> {
        let Some(endpoint) = self.config.lead_capture.endpoint() else {
            tracing::info!("no lead-capture endpoint configured; submissions run in demo mode");
            return Ok(SubmissionGateway::demo());
        };
        let timeout = Duration::from_secs(self.config.lead_capture.timeout_secs);
        let transport =
            HttpTransport::new(endpoint, timeout).context("failed to build lead-capture client")?;
        Ok(SubmissionGateway::forwarding(transport))
    }
}
