//! Favourites store implementation

use crate::engine::SortOrder;
use crate::error::Result;
use crate::models::{MotoKey, Motorcycle};
use rusqlite::{params, Connection};

/// Trait for local favourite-motorcycle storage operations
pub trait FavouriteStore {
    /// Insert or replace a motorcycle by its natural key
    fn upsert(&self, moto: &Motorcycle) -> Result<()>;

    /// Get a motorcycle by natural key
    fn get(&self, key: &MotoKey) -> Result<Option<Motorcycle>>;

    /// Remove a motorcycle by natural key; no-op if absent
    fn delete(&self, key: &MotoKey) -> Result<()>;

    /// Clear the whole table (manual reset)
    fn delete_all(&self) -> Result<()>;

    /// List all stored motorcycles ordered by model name, case-insensitively
    fn list_sorted(&self, order: SortOrder) -> Result<Vec<Motorcycle>>;

    /// Number of stored motorcycles
    fn count(&self) -> Result<usize>;
}

/// `SQLite` implementation of `FavouriteStore`
pub struct SqliteFavouriteStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteFavouriteStore<'a> {
    /// Create a new store with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Parse a motorcycle from a database row
    ///
    /// Presence in the store is the favourite flag, so it is always set here.
    fn parse_motorcycle(row: &rusqlite::Row<'_>) -> rusqlite::Result<Motorcycle> {
        Ok(Motorcycle {
            make: row.get(0)?,
            model: row.get(1)?,
            year: row.get(2)?,
            displacement: row.get(3)?,
            engine_type: row.get(4)?,
            power: row.get(5)?,
            torque: row.get(6)?,
            gearbox: row.get(7)?,
            front_tire: row.get(8)?,
            rear_tire: row.get(9)?,
            total_weight: row.get(10)?,
            favourite: true,
        })
    }
}

const SELECT_COLUMNS: &str = "make, model, year, displacement, engine_type, power, \
     torque, gearbox, front_tire, rear_tire, total_weight";

impl FavouriteStore for SqliteFavouriteStore<'_> {
    fn upsert(&self, moto: &Motorcycle) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO motorcycles
             (make, model, year, displacement, engine_type, power, torque,
              gearbox, front_tire, rear_tire, total_weight)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                moto.make,
                moto.model,
                moto.year,
                moto.displacement,
                moto.engine_type,
                moto.power,
                moto.torque,
                moto.gearbox,
                moto.front_tire,
                moto.rear_tire,
                moto.total_weight,
            ],
        )?;
        Ok(())
    }

    fn get(&self, key: &MotoKey) -> Result<Option<Motorcycle>> {
        let result = self.conn.query_row(
            &format!("SELECT {SELECT_COLUMNS} FROM motorcycles WHERE make = ? AND model = ?"),
            params![key.make, key.model],
            Self::parse_motorcycle,
        );

        match result {
            Ok(moto) => Ok(Some(moto)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&self, key: &MotoKey) -> Result<()> {
        self.conn.execute(
            "DELETE FROM motorcycles WHERE make = ? AND model = ?",
            params![key.make, key.model],
        )?;
        Ok(())
    }

    fn delete_all(&self) -> Result<()> {
        self.conn.execute("DELETE FROM motorcycles", [])?;
        Ok(())
    }

    fn list_sorted(&self, order: SortOrder) -> Result<Vec<Motorcycle>> {
        let sql = match order {
            SortOrder::Ascending => {
                format!("SELECT {SELECT_COLUMNS} FROM motorcycles ORDER BY model COLLATE NOCASE ASC")
            }
            SortOrder::Descending => {
                format!("SELECT {SELECT_COLUMNS} FROM motorcycles ORDER BY model COLLATE NOCASE DESC")
            }
        };
        let mut stmt = self.conn.prepare(&sql)?;

        let motos = stmt
            .query_map([], Self::parse_motorcycle)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(motos)
    }

    fn count(&self) -> Result<usize> {
        let count: usize =
            self.conn
                .query_row("SELECT COUNT(*) FROM motorcycles", [], |row| row.get(0))?;
        Ok(count)
    }
}
