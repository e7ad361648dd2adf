//! Research step repository — status recording, due dates, progress.
//!
//! Steps are never created or deleted here; the run initialization workflow
//! owns their lifecycle. Only `status` and `due_date` mutate.

use chrono::{NaiveDate, Utc};

use mrp_core::entities::ResearchStep;
use mrp_core::enums::StepStatus;
use mrp_core::progress::RunProgress;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_date};
use crate::service::MrpService;
use crate::stale::StaleView;

fn row_to_step(row: &libsql::Row) -> Result<ResearchStep, DatabaseError> {
    let order_index = row.get::<i64>(2)?;
    let due_date = get_opt_string(row, 6)?;
    Ok(ResearchStep {
        id: row.get::<String>(0)?,
        research_run_id: row.get::<String>(1)?,
        order_index: u32::try_from(order_index)
            .map_err(|_| DatabaseError::Query(format!("order_index out of range: {order_index}")))?,
        title: row.get::<String>(3)?,
        notes: row.get::<String>(4)?,
        status: parse_enum(&row.get::<String>(5)?)?,
        due_date: parse_optional_date(due_date.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

const STEP_COLUMNS: &str =
    "id, research_run_id, order_index, title, notes, status, due_date, created_at, updated_at";

impl MrpService {
    /// Get a step by ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the step does not exist.
    pub async fn get_step(&self, id: &str) -> Result<ResearchStep, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {STEP_COLUMNS} FROM research_steps WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "research_step",
            id: id.to_string(),
        })?;
        row_to_step(&row)
    }

    /// List a run's steps in protocol order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_steps(&self, run_id: &str) -> Result<Vec<ResearchStep>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {STEP_COLUMNS} FROM research_steps
                     WHERE research_run_id = ?1 ORDER BY order_index ASC"
                ),
                [run_id],
            )
            .await?;

        let mut steps = Vec::new();
        while let Some(row) = rows.next().await? {
            steps.push(row_to_step(&row)?);
        }
        Ok(steps)
    }

    /// Record a step's status.
    ///
    /// Any of the four statuses may follow any other; there is no transition
    /// graph. Touches `status` and `updated_at` only.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the step does not exist.
    pub async fn set_step_status(
        &self,
        step_id: &str,
        new_status: StepStatus,
    ) -> Result<ResearchStep, DatabaseError> {
        let step = self.get_step(step_id).await?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "UPDATE research_steps SET status = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![new_status.as_str(), now.to_rfc3339(), step_id],
            )
            .await?;

        self.stale()
            .notify(StaleView::Run(step.research_run_id.clone()));

        Ok(ResearchStep {
            status: new_status,
            updated_at: now,
            ..step
        })
    }

    /// Set or clear a step's due date.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the step does not exist.
    pub async fn set_step_due_date(
        &self,
        step_id: &str,
        due_date: Option<NaiveDate>,
    ) -> Result<ResearchStep, DatabaseError> {
        let step = self.get_step(step_id).await?;
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "UPDATE research_steps SET due_date = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![due_date.map(|d| d.to_string()), now.to_rfc3339(), step_id],
            )
            .await?;

        self.stale()
            .notify(StaleView::Run(step.research_run_id.clone()));

        Ok(ResearchStep {
            due_date,
            updated_at: now,
            ..step
        })
    }

    /// Per-status step counts for a run, aggregated at read time.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the run does not exist.
    pub async fn run_progress(&self, run_id: &str) -> Result<RunProgress, DatabaseError> {
        self.get_run(run_id).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT status, COUNT(*) FROM research_steps
                 WHERE research_run_id = ?1 GROUP BY status",
                [run_id],
            )
            .await?;

        let mut progress = RunProgress::default();
        while let Some(row) = rows.next().await? {
            let status: StepStatus = parse_enum(&row.get::<String>(0)?)?;
            let count = u32::try_from(row.get::<i64>(1)?)
                .map_err(|_| DatabaseError::Query("step count out of range".into()))?;
            progress.total += count;
            match status {
                StepStatus::NotStarted => progress.not_started = count,
                StepStatus::InProgress => progress.in_progress = count,
                StepStatus::Done => progress.done = count,
                StepStatus::Blocked => progress.blocked = count,
            }
        }
        Ok(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::parse_user_enum;
    use crate::test_support::helpers::{seed_project_and_run, test_service};
    use mrp_core::progress::OverallStatus;
    use rstest::rstest;

    #[rstest]
    #[case(StepStatus::NotStarted, StepStatus::Done)]
    #[case(StepStatus::Done, StepStatus::NotStarted)]
    #[case(StepStatus::Blocked, StepStatus::Done)]
    #[case(StepStatus::Done, StepStatus::Blocked)]
    #[case(StepStatus::InProgress, StepStatus::InProgress)]
    #[tokio::test]
    async fn any_status_reachable_from_any(
        #[case] from: StepStatus,
        #[case] to: StepStatus,
    ) {
        let svc = test_service().await;
        let (_, run_id) = seed_project_and_run(&svc).await;
        let step = &svc.list_steps(&run_id).await.unwrap()[0];

        svc.set_step_status(&step.id, from).await.unwrap();
        let updated = svc.set_step_status(&step.id, to).await.unwrap();
        assert_eq!(updated.status, to);

        let fetched = svc.get_step(&step.id).await.unwrap();
        assert_eq!(fetched.status, to);
    }

    #[tokio::test]
    async fn invalid_status_value_leaves_row_unchanged() {
        let svc = test_service().await;
        let (_, run_id) = seed_project_and_run(&svc).await;
        let step = &svc.list_steps(&run_id).await.unwrap()[0];

        // The enum parse is the guard; a bad value never reaches SQL.
        let parsed: Result<StepStatus, _> = parse_user_enum("archived", "status");
        assert!(matches!(parsed, Err(DatabaseError::Validation(_))));

        let fetched = svc.get_step(&step.id).await.unwrap();
        assert_eq!(fetched.status, StepStatus::NotStarted);
    }

    #[tokio::test]
    async fn status_update_touches_only_status_and_updated_at() {
        let svc = test_service().await;
        let (_, run_id) = seed_project_and_run(&svc).await;
        let before = svc.list_steps(&run_id).await.unwrap()[4].clone();

        svc.set_step_status(&before.id, StepStatus::InProgress)
            .await
            .unwrap();

        let after = svc.get_step(&before.id).await.unwrap();
        assert_eq!(after.order_index, before.order_index);
        assert_eq!(after.title, before.title);
        assert_eq!(after.notes, before.notes);
        assert_eq!(after.due_date, before.due_date);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.status, StepStatus::InProgress);
    }

    #[tokio::test]
    async fn set_status_on_missing_step_is_not_found() {
        let svc = test_service().await;
        seed_project_and_run(&svc).await;

        let result = svc.set_step_status("stp-deadbeef", StepStatus::Done).await;
        assert!(matches!(
            result,
            Err(DatabaseError::NotFound { entity: "research_step", .. })
        ));
    }

    #[tokio::test]
    async fn due_date_set_and_clear() {
        let svc = test_service().await;
        let (_, run_id) = seed_project_and_run(&svc).await;
        let step = &svc.list_steps(&run_id).await.unwrap()[0];

        let due = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
        let updated = svc.set_step_due_date(&step.id, Some(due)).await.unwrap();
        assert_eq!(updated.due_date, Some(due));

        let cleared = svc.set_step_due_date(&step.id, None).await.unwrap();
        assert_eq!(cleared.due_date, None);
        assert_eq!(svc.get_step(&step.id).await.unwrap().due_date, None);
    }

    #[tokio::test]
    async fn progress_counts_by_status() {
        let svc = test_service().await;
        let (_, run_id) = seed_project_and_run(&svc).await;
        let steps = svc.list_steps(&run_id).await.unwrap();

        svc.set_step_status(&steps[0].id, StepStatus::Done)
            .await
            .unwrap();
        svc.set_step_status(&steps[1].id, StepStatus::Done)
            .await
            .unwrap();
        svc.set_step_status(&steps[2].id, StepStatus::InProgress)
            .await
            .unwrap();
        svc.set_step_status(&steps[3].id, StepStatus::Blocked)
            .await
            .unwrap();

        let progress = svc.run_progress(&run_id).await.unwrap();
        assert_eq!(progress.total, 19);
        assert_eq!(progress.done, 2);
        assert_eq!(progress.in_progress, 1);
        assert_eq!(progress.blocked, 1);
        assert_eq!(progress.not_started, 15);
        assert_eq!(progress.overall(), OverallStatus::InProgress);
    }

    #[tokio::test]
    async fn progress_completed_when_all_done() {
        let svc = test_service().await;
        let (_, run_id) = seed_project_and_run(&svc).await;

        for step in svc.list_steps(&run_id).await.unwrap() {
            svc.set_step_status(&step.id, StepStatus::Done).await.unwrap();
        }

        let progress = svc.run_progress(&run_id).await.unwrap();
        assert_eq!(progress.done, 19);
        assert_eq!(progress.overall(), OverallStatus::Completed);
    }

    #[tokio::test]
    async fn progress_on_missing_run_is_not_found() {
        let svc = test_service().await;

        let result = svc.run_progress("run-deadbeef").await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }
}
