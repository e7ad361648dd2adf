//! Shared test utilities for mrp-db tests.

#[cfg(test)]
pub(crate) mod helpers {
    use tokio::sync::mpsc::UnboundedReceiver;

    use crate::MrpDb;
    use crate::service::MrpService;
    use crate::stale::{StaleView, StaleViewNotifier};

    /// Create an in-memory MrpService with stale-view signals disabled.
    pub async fn test_service() -> MrpService {
        let db = MrpDb::open_local(":memory:").await.unwrap();
        MrpService::from_db(db, StaleViewNotifier::disabled())
    }

    /// Create an in-memory MrpService with a subscribed stale-view receiver.
    pub async fn test_service_with_stale() -> (MrpService, UnboundedReceiver<StaleView>) {
        let db = MrpDb::open_local(":memory:").await.unwrap();
        let (notifier, rx) = StaleViewNotifier::new();
        (MrpService::from_db(db, notifier), rx)
    }

    /// Create a project and return its ID.
    pub async fn seed_project(svc: &MrpService) -> String {
        svc.create_project("Aurora", None).await.unwrap().id
    }

    /// Create a project plus one run; returns `(project_id, run_id)`.
    pub async fn seed_project_and_run(svc: &MrpService) -> (String, String) {
        let project_id = seed_project(svc).await;
        let run_id = svc
            .create_run(&project_id, "MR-2025-Q1", None, None)
            .await
            .unwrap()
            .id;
        (project_id, run_id)
    }
}
