//! Service layer orchestrating database mutations with stale-view signals.
//!
//! `MrpService` wraps `MrpDb` (raw database access) and `StaleViewNotifier`
//! (presentation invalidation). All repo methods are implemented as
//! `impl MrpService` blocks in [`crate::repos`].
//!
//! Every mutation method follows this protocol:
//! 1. Validate input
//! 2. Execute SQL (one transaction where multiple rows must commit together)
//! 3. Publish the stale-view signal for the affected project/run

use crate::MrpDb;
use crate::error::DatabaseError;
use crate::stale::StaleViewNotifier;

pub struct MrpService {
    db: MrpDb,
    stale: StaleViewNotifier,
}

impl MrpService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"` for tests.
    /// * `stale` — Stale-view notifier. Pass `StaleViewNotifier::disabled()`
    ///   when no presentation layer subscribes.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str, stale: StaleViewNotifier) -> Result<Self, DatabaseError> {
        let db = MrpDb::open_local(db_path).await?;
        Ok(Self { db, stale })
    }

    /// Create from an existing `MrpDb` (for testing).
    #[must_use]
    pub fn from_db(db: MrpDb, stale: StaleViewNotifier) -> Self {
        Self { db, stale }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &MrpDb {
        &self.db
    }

    /// Access the stale-view notifier.
    #[must_use]
    pub const fn stale(&self) -> &StaleViewNotifier {
        &self.stale
    }
}

#[cfg(test)]
mod tests {
    use crate::stale::StaleView;
    use crate::test_support::helpers::test_service_with_stale;
    use crate::updates::project::ProjectUpdateBuilder;

    #[tokio::test]
    async fn mutation_publishes_signal_for_affected_view() {
        let (svc, mut rx) = test_service_with_stale().await;

        let project = svc.create_project("Aurora", None).await.unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            StaleView::Project(project.id.clone())
        );

        let update = ProjectUpdateBuilder::new().name("Aurora v2").build();
        svc.update_project(&project.id, update).await.unwrap();
        assert_eq!(rx.try_recv().unwrap(), StaleView::Project(project.id));
    }

    #[tokio::test]
    async fn failed_mutation_publishes_nothing() {
        let (svc, mut rx) = test_service_with_stale().await;

        assert!(svc.create_project("", None).await.is_err());
        assert!(rx.try_recv().is_err());
    }
}
