use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::pkg::internal::adaptors::{jobs::spec::JobTable, users::spec::UserTable};
use crate::pkg::internal::seed;

/// Sole owner of the job and user collections. Constructed once at startup
/// and handed to the route layer through `AppState`; tests build their own
/// instances instead of sharing a global.
///
/// Every operation runs to completion while holding the table lock, so reads
/// always observe fully applied writes and concurrent writes to the same id
/// serialize with last-write-wins semantics. Nothing is persisted: the data
/// lives exactly as long as the process.
pub struct MemStore {
    jobs: RwLock<JobTable>,
    users: RwLock<UserTable>,
}

impl MemStore {
    pub fn new() -> Self {
        MemStore {
            jobs: RwLock::new(JobTable::new()),
            users: RwLock::new(UserTable::new()),
        }
    }

    /// Store pre-populated with the admin account and the sample postings.
    pub fn seeded() -> Self {
        let store = MemStore::new();
        seed::apply(&store);
        store
    }

    pub fn jobs(&self) -> RwLockReadGuard<'_, JobTable> {
        self.jobs.read()
    }

    pub fn jobs_mut(&self) -> RwLockWriteGuard<'_, JobTable> {
        self.jobs.write()
    }

    pub fn users(&self) -> RwLockReadGuard<'_, UserTable> {
        self.users.read()
    }

    pub fn users_mut(&self) -> RwLockWriteGuard<'_, UserTable> {
        self.users.write()
    }
}

impl Default for MemStore {
    fn default() -> Self {
        MemStore::new()
    }
}
