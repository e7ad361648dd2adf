//! Research run repository — run initialization workflow + CRUD.
//!
//! Run creation materializes the 19 catalog steps in the same transaction
//! as the run row: either all 20 rows commit or none do. A run with zero or
//! partial steps cannot exist.

use chrono::{NaiveDate, Utc};

use mrp_core::catalog::{STEP_COUNT, step_catalog};
use mrp_core::entities::ResearchRun;
use mrp_core::enums::StepStatus;
use mrp_core::ids::{PREFIX_RUN, PREFIX_STEP};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_optional_date};
use crate::service::MrpService;
use crate::stale::StaleView;
use crate::updates::run::RunUpdate;

fn row_to_run(row: &libsql::Row) -> Result<ResearchRun, DatabaseError> {
    let start_date = get_opt_string(row, 4)?;
    let end_date = get_opt_string(row, 5)?;
    Ok(ResearchRun {
        id: row.get::<String>(0)?,
        project_id: row.get::<String>(1)?,
        label: row.get::<String>(2)?,
        description: get_opt_string(row, 3)?,
        start_date: parse_optional_date(start_date.as_deref())?,
        end_date: parse_optional_date(end_date.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl MrpService {
    /// Create a research run and seed its 19 protocol steps atomically.
    ///
    /// Step rows copy `order_index`, `title`, and `notes` verbatim from the
    /// catalog, each starting at `not_started`. The caller redirects on the
    /// returned run's `id`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if `label` is empty,
    /// `DatabaseError::NotFound` if the project does not exist, or
    /// `DatabaseError` if any insert fails (in which case nothing commits).
    pub async fn create_run(
        &self,
        project_id: &str,
        label: &str,
        description: Option<&str>,
        start_date: Option<NaiveDate>,
    ) -> Result<ResearchRun, DatabaseError> {
        if label.trim().is_empty() {
            return Err(DatabaseError::Validation(
                "run label must not be empty".into(),
            ));
        }
        self.get_project(project_id).await?;

        let now = Utc::now();
        let run_id = self.db().generate_id(PREFIX_RUN).await?;
        let mut step_ids = Vec::with_capacity(STEP_COUNT);
        for _ in 0..STEP_COUNT {
            step_ids.push(self.db().generate_id(PREFIX_STEP).await?);
        }

        let tx = self.db().conn().transaction().await?;
        tx.execute(
            "INSERT INTO research_runs (id, project_id, label, description, start_date, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
            libsql::params![
                run_id.as_str(),
                project_id,
                label,
                description,
                start_date.map(|d| d.to_string()),
                now.to_rfc3339()
            ],
        )
        .await?;

        for (step_id, def) in step_ids.iter().zip(step_catalog()) {
            tx.execute(
                "INSERT INTO research_steps (id, research_run_id, order_index, title, notes, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
                libsql::params![
                    step_id.as_str(),
                    run_id.as_str(),
                    i64::from(def.order),
                    def.title,
                    def.notes,
                    StepStatus::NotStarted.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;
        }
        tx.commit().await?;

        tracing::info!(run_id = %run_id, project_id, "research run initialized with {STEP_COUNT} steps");
        self.stale()
            .notify(StaleView::Project(project_id.to_string()));

        Ok(ResearchRun {
            id: run_id,
            project_id: project_id.to_string(),
            label: label.to_string(),
            description: description.map(String::from),
            start_date,
            end_date: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a research run by ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the run does not exist.
    pub async fn get_run(&self, id: &str) -> Result<ResearchRun, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, project_id, label, description, start_date, end_date, created_at, updated_at
                 FROM research_runs WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "research_run",
            id: id.to_string(),
        })?;
        row_to_run(&row)
    }

    /// List a project's runs ordered by creation date descending.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_runs(&self, project_id: &str) -> Result<Vec<ResearchRun>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, project_id, label, description, start_date, end_date, created_at, updated_at
                 FROM research_runs WHERE project_id = ?1 ORDER BY created_at DESC",
                [project_id],
            )
            .await?;

        let mut runs = Vec::new();
        while let Some(row) = rows.next().await? {
            runs.push(row_to_run(&row)?);
        }
        Ok(runs)
    }

    /// Update a run's metadata with dynamic SET clauses.
    ///
    /// Steps are untouched; only the run row mutates.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if a new label is empty,
    /// `DatabaseError::NotFound` if the run does not exist.
    pub async fn update_run(
        &self,
        run_id: &str,
        update: RunUpdate,
    ) -> Result<ResearchRun, DatabaseError> {
        if let Some(ref label) = update.label {
            if label.trim().is_empty() {
                return Err(DatabaseError::Validation(
                    "run label must not be empty".into(),
                ));
            }
        }

        self.get_run(run_id).await?;

        let now = Utc::now();
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref label) = update.label {
            params.push(libsql::Value::Text(label.clone()));
            sets.push(format!("label = ?{idx}"));
            idx += 1;
        }
        if let Some(ref description) = update.description {
            match description {
                Some(d) => params.push(libsql::Value::Text(d.clone())),
                None => params.push(libsql::Value::Null),
            }
            sets.push(format!("description = ?{idx}"));
            idx += 1;
        }
        if let Some(ref start_date) = update.start_date {
            match start_date {
                Some(d) => params.push(libsql::Value::Text(d.to_string())),
                None => params.push(libsql::Value::Null),
            }
            sets.push(format!("start_date = ?{idx}"));
            idx += 1;
        }
        if let Some(ref end_date) = update.end_date {
            match end_date {
                Some(d) => params.push(libsql::Value::Text(d.to_string())),
                None => params.push(libsql::Value::Null),
            }
            sets.push(format!("end_date = ?{idx}"));
            idx += 1;
        }

        params.push(libsql::Value::Text(now.to_rfc3339()));
        sets.push(format!("updated_at = ?{idx}"));
        idx += 1;

        params.push(libsql::Value::Text(run_id.to_string()));
        let sql = format!(
            "UPDATE research_runs SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );

        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.stale().notify(StaleView::Run(run_id.to_string()));

        self.get_run(run_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_project, test_service};
    use crate::updates::run::RunUpdateBuilder;

    #[tokio::test]
    async fn create_run_seeds_nineteen_steps() {
        let svc = test_service().await;
        let project_id = seed_project(&svc).await;

        let run = svc
            .create_run(&project_id, "MR-2025-Q1", None, None)
            .await
            .unwrap();

        assert!(run.id.starts_with("run-"));
        assert_eq!(run.project_id, project_id);

        let steps = svc.list_steps(&run.id).await.unwrap();
        assert_eq!(steps.len(), STEP_COUNT);
        for (step, def) in steps.iter().zip(step_catalog()) {
            assert_eq!(step.order_index, def.order);
            assert_eq!(step.title, def.title);
            assert_eq!(step.notes, def.notes);
            assert_eq!(step.status, StepStatus::NotStarted);
            assert_eq!(step.due_date, None);
        }
    }

    #[tokio::test]
    async fn create_run_rejects_empty_label() {
        let svc = test_service().await;
        let project_id = seed_project(&svc).await;

        let result = svc.create_run(&project_id, "  ", None, None).await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));

        // Nothing committed — no orphan run, no orphan steps.
        let runs = svc.list_runs(&project_id).await.unwrap();
        assert!(runs.is_empty());
    }

    #[tokio::test]
    async fn create_run_requires_existing_project() {
        let svc = test_service().await;

        let result = svc.create_run("prj-deadbeef", "MR-2025-Q1", None, None).await;
        assert!(matches!(
            result,
            Err(DatabaseError::NotFound { entity: "project", .. })
        ));
    }

    #[tokio::test]
    async fn create_run_stores_start_date() {
        let svc = test_service().await;
        let project_id = seed_project(&svc).await;

        let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let run = svc
            .create_run(&project_id, "MR-2025-Q1", Some("Q1 cycle"), Some(start))
            .await
            .unwrap();

        let fetched = svc.get_run(&run.id).await.unwrap();
        assert_eq!(fetched.start_date, Some(start));
        assert_eq!(fetched.end_date, None);
        assert_eq!(fetched.description.as_deref(), Some("Q1 cycle"));
    }

    #[tokio::test]
    async fn each_run_gets_independent_step_copies() {
        let svc = test_service().await;
        let project_id = seed_project(&svc).await;

        let run_a = svc.create_run(&project_id, "MR-A", None, None).await.unwrap();
        let run_b = svc.create_run(&project_id, "MR-B", None, None).await.unwrap();

        let step_a1 = &svc.list_steps(&run_a.id).await.unwrap()[0];
        svc.set_step_status(&step_a1.id, StepStatus::Done)
            .await
            .unwrap();

        // Run B's copy of step 1 is unaffected.
        let step_b1 = &svc.list_steps(&run_b.id).await.unwrap()[0];
        assert_eq!(step_b1.status, StepStatus::NotStarted);
    }

    #[tokio::test]
    async fn list_runs_scoped_to_project() {
        let svc = test_service().await;
        let project_a = seed_project(&svc).await;
        let project_b = svc.create_project("Other", None).await.unwrap().id;

        svc.create_run(&project_a, "MR-A1", None, None).await.unwrap();
        svc.create_run(&project_a, "MR-A2", None, None).await.unwrap();
        svc.create_run(&project_b, "MR-B1", None, None).await.unwrap();

        assert_eq!(svc.list_runs(&project_a).await.unwrap().len(), 2);
        assert_eq!(svc.list_runs(&project_b).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_run_partial() {
        let svc = test_service().await;
        let project_id = seed_project(&svc).await;
        let run = svc
            .create_run(&project_id, "MR-2025-Q1", None, None)
            .await
            .unwrap();

        let end = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let update = RunUpdateBuilder::new()
            .label("MR-2025-Q1 (final)")
            .end_date(Some(end))
            .build();
        let updated = svc.update_run(&run.id, update).await.unwrap();

        assert_eq!(updated.label, "MR-2025-Q1 (final)");
        assert_eq!(updated.end_date, Some(end));

        // Steps untouched by run metadata edits.
        let steps = svc.list_steps(&run.id).await.unwrap();
        assert_eq!(steps.len(), STEP_COUNT);
    }

    #[tokio::test]
    async fn update_run_rejects_empty_label() {
        let svc = test_service().await;
        let project_id = seed_project(&svc).await;
        let run = svc
            .create_run(&project_id, "MR-2025-Q1", None, None)
            .await
            .unwrap();

        let update = RunUpdateBuilder::new().label("").build();
        let result = svc.update_run(&run.id, update).await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));

        let fetched = svc.get_run(&run.id).await.unwrap();
        assert_eq!(fetched.label, "MR-2025-Q1");
    }
}
