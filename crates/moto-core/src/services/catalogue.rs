//! Screen-scoped catalogue service
//!
//! Owns one repository and one reconciliation engine, and is the single
//! logical owner of the visible list for a frontend's lifetime. All user
//! intents (refresh, search, toggle, sort, mode switch, random pick, reset)
//! enter through here.

use crate::engine::{ReconcileEngine, SortOrder, ViewMode};
use crate::error::Result;
use crate::models::{MotoKey, Motorcycle};
use crate::repository::CatalogueRepository;
use tokio::sync::watch;

pub struct CatalogueService {
    repo: CatalogueRepository,
    engine: ReconcileEngine,
}

impl CatalogueService {
    /// Create a service and seed the engine with the current local snapshot
    pub fn new(repo: CatalogueRepository, order: SortOrder, view: ViewMode) -> Result<Self> {
        let mut service = Self {
            repo,
            engine: ReconcileEngine::new(order, view),
        };
        service.reload_local()?;
        Ok(service)
    }

    /// Fetch the remote catalogue and feed it to the engine.
    ///
    /// On failure the error is logged and returned; the visible list keeps
    /// its last good value.
    pub async fn refresh(&mut self) -> Result<usize> {
        match self.repo.remote_list().await {
            Ok(page) => {
                let fetched = page.len();
                self.engine.update_remote(page);
                Ok(fetched)
            }
            Err(error) => {
                tracing::warn!(%error, "remote refresh failed, keeping last visible list");
                Err(error)
            }
        }
    }

    /// Fetch a model-narrowed remote page and feed it to the engine
    pub async fn search(&mut self, query: &str) -> Result<usize> {
        match self.repo.remote_search(query).await {
            Ok(page) => {
                let fetched = page.len();
                self.engine.update_remote(page);
                Ok(fetched)
            }
            Err(error) => {
                tracing::warn!(%error, "remote search failed, keeping last visible list");
                Err(error)
            }
        }
    }

    /// Re-read the local favourites into the engine
    pub fn reload_local(&mut self) -> Result<()> {
        let local = self.repo.local_list_sorted(self.engine.sort_order())?;
        self.engine.update_local(local);
        Ok(())
    }

    /// Optimistic toggle: write the local store first, then reload the local
    /// snapshot so the next recombination reflects it
    pub fn set_favourite(&mut self, mut moto: Motorcycle, favourite: bool) -> Result<()> {
        moto.favourite = favourite;
        self.repo.apply_toggle(&moto)?;
        self.reload_local()
    }

    /// Clear the store, re-import the whole remote page, reload local
    pub async fn reset(&mut self) -> Result<usize> {
        let page = self.repo.remote_list().await?;
        self.repo.reset_and_import(&page)?;
        let imported = page.len();
        self.engine.update_remote(page);
        self.reload_local()?;
        Ok(imported)
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.engine.set_sort_order(order);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.engine.set_view_mode(mode);
    }

    /// Look up a single local favourite
    pub fn get_local(&self, key: &MotoKey) -> Result<Option<Motorcycle>> {
        self.repo.get_local(key)
    }

    /// Look up one catalogue record by natural key via a narrowed fetch
    pub async fn find_remote(&self, key: &MotoKey) -> Result<Option<Motorcycle>> {
        let page = self.repo.remote_search(&key.model).await?;
        Ok(page.into_iter().find(|moto| &moto.key() == key))
    }

    pub fn favourite_count(&self) -> Result<usize> {
        self.repo.favourite_count()
    }

    /// The currently published derived list
    #[must_use]
    pub fn visible(&self) -> Vec<Motorcycle> {
        self.engine.visible()
    }

    /// Live subscription to the derived list
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Motorcycle>> {
        self.engine.subscribe()
    }

    /// Uniform random entry from the visible set; `None` when empty
    #[must_use]
    pub fn random_pick(&self) -> Option<Motorcycle> {
        self.engine.random_pick()
    }
}
