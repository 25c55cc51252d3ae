//! Reconciliation engine
//!
//! Merges the latest remote catalogue snapshot and the latest local
//! favourites snapshot into one flag-annotated, filtered, sorted list, and
//! republishes it whenever either input (or the projection config) changes.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use tokio::sync::watch;

use crate::models::{MotoKey, Motorcycle};

/// Model-name ordering applied to the visible list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// The opposite order (sort-menu toggle)
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Which slice of the merged collection is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Every distinct motorcycle from either snapshot
    #[default]
    All,
    /// Only entries present in the local store
    FavouritesOnly,
}

impl ViewMode {
    /// The opposite mode (favourites toggle)
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::All => Self::FavouritesOnly,
            Self::FavouritesOnly => Self::All,
        }
    }
}

/// Merge a remote snapshot with a local snapshot into the visible list.
///
/// One entry per distinct natural key across both snapshots; a key present
/// locally is sourced from the local record (its spec fields win) and carries
/// `favourite = true`, remote-only keys carry `favourite = false`. The result
/// is filtered by `view` and stably sorted by case-normalized model name.
#[must_use]
pub fn reconcile(
    remote: &[Motorcycle],
    local: &[Motorcycle],
    view: ViewMode,
    order: SortOrder,
) -> Vec<Motorcycle> {
    let local_keys: HashSet<MotoKey> = local.iter().map(Motorcycle::key).collect();

    // Remote entries not shadowed by a local row, flag cleared
    let mut merged: Vec<Motorcycle> = remote
        .iter()
        .filter(|moto| !local_keys.contains(&moto.key()))
        .map(|moto| {
            let mut moto = moto.clone();
            moto.favourite = false;
            moto
        })
        .collect();

    // Local rows own their record data and are the flagged set
    merged.extend(local.iter().map(|moto| {
        let mut moto = moto.clone();
        moto.favourite = true;
        moto
    }));

    if view == ViewMode::FavouritesOnly {
        merged.retain(|moto| moto.favourite);
    }

    // Vec::sort_by is stable: equal model names keep their pre-sort order
    match order {
        SortOrder::Ascending => merged.sort_by(|a, b| a.sort_key().cmp(&b.sort_key())),
        SortOrder::Descending => merged.sort_by(|a, b| b.sort_key().cmp(&a.sort_key())),
    }

    merged
}

/// Holds the latest snapshot of each side plus the projection config, and
/// publishes the derived list through a watch channel.
///
/// Snapshots are last-value-wins: every update replaces the previous value
/// wholesale and triggers a synchronous recompute, so interleaving of remote
/// and local updates never matters.
pub struct ReconcileEngine {
    remote: Vec<Motorcycle>,
    local: Vec<Motorcycle>,
    sort_order: SortOrder,
    view_mode: ViewMode,
    visible_tx: watch::Sender<Vec<Motorcycle>>,
}

impl ReconcileEngine {
    /// Create an engine with empty snapshots and the given projection config
    #[must_use]
    pub fn new(sort_order: SortOrder, view_mode: ViewMode) -> Self {
        let (visible_tx, _) = watch::channel(Vec::new());
        Self {
            remote: Vec::new(),
            local: Vec::new(),
            sort_order,
            view_mode,
            visible_tx,
        }
    }

    /// Replace the remote snapshot and republish
    pub fn update_remote(&mut self, snapshot: Vec<Motorcycle>) {
        self.remote = snapshot;
        self.recompute();
    }

    /// Replace the local snapshot and republish
    pub fn update_local(&mut self, snapshot: Vec<Motorcycle>) {
        self.local = snapshot;
        self.recompute();
    }

    /// Change the sort order and republish; never refetches
    pub fn set_sort_order(&mut self, order: SortOrder) {
        if self.sort_order != order {
            self.sort_order = order;
            self.recompute();
        }
    }

    /// Change the view mode and republish; never refetches
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode != mode {
            self.view_mode = mode;
            self.recompute();
        }
    }

    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Subscribe to the derived list; the receiver always starts with the
    /// latest published value
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Motorcycle>> {
        self.visible_tx.subscribe()
    }

    /// The currently published derived list
    #[must_use]
    pub fn visible(&self) -> Vec<Motorcycle> {
        self.visible_tx.borrow().clone()
    }

    /// Draw a uniformly random entry from the visible set
    ///
    /// Returns `None` on an empty set, never panics.
    #[must_use]
    pub fn random_pick(&self) -> Option<Motorcycle> {
        self.visible_tx
            .borrow()
            .choose(&mut rand::thread_rng())
            .cloned()
    }

    fn recompute(&self) {
        let visible = reconcile(&self.remote, &self.local, self.view_mode, self.sort_order);
        tracing::debug!(
            entries = visible.len(),
            view = ?self.view_mode,
            order = ?self.sort_order,
            "republishing visible list"
        );
        // send_replace keeps the value even with no subscribers
        self.visible_tx.send_replace(visible);
    }
}

impl Default for ReconcileEngine {
    fn default() -> Self {
        Self::new(SortOrder::default(), ViewMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn moto(make: &str, model: &str) -> Motorcycle {
        Motorcycle::new(make, model)
    }

    fn fav(make: &str, model: &str) -> Motorcycle {
        let mut m = Motorcycle::new(make, model);
        m.favourite = true;
        m
    }

    fn models(list: &[Motorcycle]) -> Vec<&str> {
        list.iter().map(|m| m.model.as_str()).collect()
    }

    #[test]
    fn test_union_has_one_entry_per_key() {
        let remote = vec![moto("Honda", "CBR600RR"), moto("Yamaha", "MT-07")];
        let local = vec![fav("Yamaha", "MT-07"), fav("Ducati", "Monster")];

        let merged = reconcile(&remote, &local, ViewMode::All, SortOrder::Ascending);

        assert_eq!(merged.len(), 3);
        let keys: std::collections::HashSet<_> = merged.iter().map(Motorcycle::key).collect();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_flag_derived_from_local_presence() {
        let mut remote_fav = moto("Yamaha", "MT-07");
        // A lying remote payload must not be trusted
        remote_fav.favourite = true;
        let remote = vec![moto("Honda", "CBR600RR"), remote_fav];
        let local = vec![fav("Ducati", "Monster")];

        let merged = reconcile(&remote, &local, ViewMode::All, SortOrder::Ascending);

        for entry in &merged {
            let expected = entry.make == "Ducati";
            assert_eq!(entry.favourite, expected, "{}", entry.key());
        }
    }

    #[test]
    fn test_local_record_wins_over_remote() {
        let mut remote_entry = moto("Yamaha", "MT-07");
        remote_entry.year = Some("2019".to_string());
        let mut local_entry = fav("Yamaha", "MT-07");
        local_entry.year = Some("2021".to_string());

        let merged = reconcile(
            &[remote_entry],
            &[local_entry],
            ViewMode::All,
            SortOrder::Ascending,
        );

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].year.as_deref(), Some("2021"));
        assert!(merged[0].favourite);
    }

    #[test]
    fn test_local_only_entry_survives_remote_removal() {
        let remote = vec![moto("Honda", "CBR600RR")];
        let local = vec![fav("Suzuki", "Hayabusa")];

        let merged = reconcile(&remote, &local, ViewMode::All, SortOrder::Ascending);

        assert!(merged.iter().any(|m| m.model == "Hayabusa" && m.favourite));
    }

    #[test]
    fn test_favourites_only_projection() {
        let remote = vec![moto("Honda", "CBR600RR"), moto("Yamaha", "MT-07")];
        let local = vec![fav("Yamaha", "MT-07")];

        let merged = reconcile(&remote, &local, ViewMode::FavouritesOnly, SortOrder::Ascending);

        assert_eq!(models(&merged), vec!["MT-07"]);
        assert!(merged[0].favourite);
    }

    #[test]
    fn test_sort_orders_are_reverses() {
        let remote = vec![
            moto("Yamaha", "mt-07"),
            moto("Honda", "CBR600RR"),
            moto("Suzuki", "Hayabusa"),
        ];

        let asc = reconcile(&remote, &[], ViewMode::All, SortOrder::Ascending);
        let mut desc = reconcile(&remote, &[], ViewMode::All, SortOrder::Descending);

        assert_eq!(models(&asc), vec!["CBR600RR", "Hayabusa", "mt-07"]);
        desc.reverse();
        assert_eq!(models(&asc), models(&desc));
    }

    #[test]
    fn test_equal_models_keep_union_order() {
        // Same model name from two makes: stable sort must keep union order
        let remote = vec![moto("Honda", "Monkey"), moto("Skyteam", "monkey")];

        let merged = reconcile(&remote, &[], ViewMode::All, SortOrder::Ascending);

        assert_eq!(merged[0].make, "Honda");
        assert_eq!(merged[1].make, "Skyteam");
    }

    #[test]
    fn test_readme_scenario() {
        // Remote two entries, local empty
        let remote = vec![moto("Honda", "CBR600RR"), moto("Yamaha", "MT-07")];
        let all = reconcile(&remote, &[], ViewMode::All, SortOrder::Ascending);
        assert_eq!(models(&all), vec!["CBR600RR", "MT-07"]);
        assert!(all.iter().all(|m| !m.favourite));

        // User flags Yamaha MT-07
        let local = vec![fav("Yamaha", "MT-07")];
        let all = reconcile(&remote, &local, ViewMode::All, SortOrder::Ascending);
        assert_eq!(models(&all), vec!["CBR600RR", "MT-07"]);
        assert!(!all[0].favourite);
        assert!(all[1].favourite);

        let flagged = reconcile(&remote, &local, ViewMode::FavouritesOnly, SortOrder::Ascending);
        assert_eq!(models(&flagged), vec!["MT-07"]);
    }

    #[test]
    fn test_engine_republishes_on_every_input() {
        let mut engine = ReconcileEngine::default();
        let rx = engine.subscribe();
        assert!(rx.borrow().is_empty());

        engine.update_remote(vec![moto("Honda", "CBR600RR"), moto("Yamaha", "MT-07")]);
        assert_eq!(models(&engine.visible()), vec!["CBR600RR", "MT-07"]);

        engine.update_local(vec![fav("Yamaha", "MT-07")]);
        assert!(engine.visible()[1].favourite);

        engine.set_view_mode(ViewMode::FavouritesOnly);
        assert_eq!(models(&engine.visible()), vec!["MT-07"]);

        engine.set_sort_order(SortOrder::Descending);
        engine.set_view_mode(ViewMode::All);
        assert_eq!(models(&engine.visible()), vec!["MT-07", "CBR600RR"]);

        // The subscription observed the same final value
        assert_eq!(*rx.borrow(), engine.visible());
    }

    #[test]
    fn test_mode_switch_without_refetch_uses_latest_snapshots() {
        let mut engine = ReconcileEngine::default();
        engine.update_remote(vec![moto("Honda", "CBR600RR")]);
        engine.update_local(vec![fav("Ducati", "Monster")]);

        engine.set_view_mode(ViewMode::FavouritesOnly);
        assert_eq!(models(&engine.visible()), vec!["Monster"]);

        engine.set_view_mode(ViewMode::All);
        assert_eq!(engine.visible().len(), 2);
    }

    #[test]
    fn test_random_pick_none_on_empty() {
        let engine = ReconcileEngine::default();
        assert!(engine.random_pick().is_none());
    }

    #[test]
    fn test_random_pick_respects_view_mode() {
        let mut engine = ReconcileEngine::new(SortOrder::Ascending, ViewMode::FavouritesOnly);
        engine.update_remote(vec![moto("Honda", "CBR600RR")]);
        engine.update_local(vec![fav("Yamaha", "MT-07")]);

        for _ in 0..20 {
            let pick = engine.random_pick().unwrap();
            assert_eq!(pick.model, "MT-07");
        }
    }

    #[test]
    fn test_toggled_enums() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(ViewMode::All.toggled(), ViewMode::FavouritesOnly);
    }
}
