//! Repository facade over the remote catalogue and the local favourites store

use crate::db::{Database, FavouriteStore, SqliteFavouriteStore};
use crate::engine::SortOrder;
use crate::error::Result;
use crate::models::{MotoKey, Motorcycle};
use crate::remote::CatalogueClient;

/// Single access point for reads and writes against both data sources.
///
/// Holds the one mutable shared resource (the local store); every mutation
/// goes through `save`, `delete`, or `reset_and_import`.
pub struct CatalogueRepository {
    client: CatalogueClient,
    db: Database,
}

impl CatalogueRepository {
    pub const fn new(client: CatalogueClient, db: Database) -> Self {
        Self { client, db }
    }

    fn store(&self) -> SqliteFavouriteStore<'_> {
        SqliteFavouriteStore::new(self.db.connection())
    }

    /// One-shot fetch of the remote catalogue page
    pub async fn remote_list(&self) -> Result<Vec<Motorcycle>> {
        self.client.fetch_all().await
    }

    /// One-shot narrowed fetch by model text
    pub async fn remote_search(&self, query: &str) -> Result<Vec<Motorcycle>> {
        self.client.fetch_by_text(query).await
    }

    /// Read the local favourites, ordered by model name
    pub fn local_list_sorted(&self, order: SortOrder) -> Result<Vec<Motorcycle>> {
        self.store().list_sorted(order)
    }

    /// Look up a single local favourite by natural key
    pub fn get_local(&self, key: &MotoKey) -> Result<Option<Motorcycle>> {
        self.store().get(key)
    }

    /// Persist a motorcycle in the local store
    pub fn save(&self, moto: &Motorcycle) -> Result<()> {
        self.store().upsert(moto)
    }

    /// Remove a motorcycle from the local store
    pub fn delete(&self, key: &MotoKey) -> Result<()> {
        self.store().delete(key)
    }

    /// Apply a flag toggle: set means persisted, clear means absent.
    ///
    /// This is the single place encoding that presence in the local store is
    /// the favourite flag.
    pub fn apply_toggle(&self, moto: &Motorcycle) -> Result<()> {
        if moto.favourite {
            self.save(moto)
        } else {
            self.delete(&moto.key())
        }
    }

    /// Clear the store and save every given record (manual reset/resync)
    pub fn reset_and_import(&self, records: &[Motorcycle]) -> Result<()> {
        let store = self.store();
        store.delete_all()?;
        for record in records {
            store.upsert(record)?;
        }
        tracing::info!(imported = records.len(), "local store reset and reimported");
        Ok(())
    }

    /// Number of locally stored favourites
    pub fn favourite_count(&self) -> Result<usize> {
        self.store().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn setup() -> CatalogueRepository {
        let client = CatalogueClient::with_base_url("http://localhost:0", "test-key").unwrap();
        let db = Database::open_in_memory().unwrap();
        CatalogueRepository::new(client, db)
    }

    #[test]
    fn test_apply_toggle_branches_on_flag() {
        let repo = setup();

        let mut moto = Motorcycle::new("Yamaha", "MT-07");
        moto.favourite = true;
        repo.apply_toggle(&moto).unwrap();
        assert!(repo.get_local(&moto.key()).unwrap().is_some());

        moto.favourite = false;
        repo.apply_toggle(&moto).unwrap();
        assert!(repo.get_local(&moto.key()).unwrap().is_none());
    }

    #[test]
    fn test_apply_toggle_is_idempotent() {
        let repo = setup();

        let mut moto = Motorcycle::new("Honda", "CBR600RR");
        moto.favourite = true;
        repo.apply_toggle(&moto).unwrap();
        repo.apply_toggle(&moto).unwrap();
        assert_eq!(repo.favourite_count().unwrap(), 1);

        moto.favourite = false;
        repo.apply_toggle(&moto).unwrap();
        repo.apply_toggle(&moto).unwrap();
        assert_eq!(repo.favourite_count().unwrap(), 0);
    }

    #[test]
    fn test_reset_and_import_saves_everything() {
        let repo = setup();

        let mut old = Motorcycle::new("Suzuki", "Hayabusa");
        old.favourite = true;
        repo.apply_toggle(&old).unwrap();

        let page = vec![
            Motorcycle::new("Honda", "CBR600RR"),
            Motorcycle::new("Yamaha", "MT-07"),
        ];
        repo.reset_and_import(&page).unwrap();

        // Import is unconditional: exactly the imported page survives
        assert_eq!(repo.favourite_count().unwrap(), 2);
        assert!(repo.get_local(&old.key()).unwrap().is_none());
        assert!(repo
            .get_local(&MotoKey::new("Honda", "CBR600RR"))
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_local_list_sorted_dispatch() {
        let repo = setup();
        repo.save(&Motorcycle::new("Yamaha", "MT-07")).unwrap();
        repo.save(&Motorcycle::new("Honda", "CBR600RR")).unwrap();

        let asc = repo.local_list_sorted(SortOrder::Ascending).unwrap();
        assert_eq!(asc[0].model, "CBR600RR");

        let desc = repo.local_list_sorted(SortOrder::Descending).unwrap();
        assert_eq!(desc[0].model, "MT-07");
    }
}
