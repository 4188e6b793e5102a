//! Service layer wrapping the database handle and lifecycle hooks.
//!
//! All repository methods are implemented as `impl FolioService` blocks in
//! `repos/*`. Article saves run the registered `before_save` hooks before
//! any SQL and the `after_save` hooks once the row is committed.

use folio_hooks::HookRegistry;

use crate::FolioDb;
use crate::error::DatabaseError;

pub struct FolioService {
    db: FolioDb,
    hooks: HookRegistry,
}

impl FolioService {
    /// Open (or create) the store at `db_path`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str, hooks: HookRegistry) -> Result<Self, DatabaseError> {
        let db = FolioDb::open_local(db_path).await?;
        Ok(Self::from_db(db, hooks))
    }

    /// A throwaway in-memory store.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if migrations fail.
    pub async fn in_memory(hooks: HookRegistry) -> Result<Self, DatabaseError> {
        Self::new_local(":memory:", hooks).await
    }

    #[must_use]
    pub const fn from_db(db: FolioDb, hooks: HookRegistry) -> Self {
        Self { db, hooks }
    }

    #[must_use]
    pub const fn db(&self) -> &FolioDb {
        &self.db
    }

    #[must_use]
    pub const fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }
}
