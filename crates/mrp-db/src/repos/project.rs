//! Project repository — create, read, update. Projects are never deleted.

use chrono::Utc;

use mrp_core::entities::Project;
use mrp_core::ids::PREFIX_PROJECT;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::MrpService;
use crate::stale::StaleView;
use crate::updates::project::ProjectUpdate;

fn row_to_project(row: &libsql::Row) -> Result<Project, DatabaseError> {
    Ok(Project {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        description: get_opt_string(row, 2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl MrpService {
    /// Create a new project.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if `name` is empty, or
    /// `DatabaseError` if the INSERT fails.
    pub async fn create_project(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Project, DatabaseError> {
        if name.trim().is_empty() {
            return Err(DatabaseError::Validation(
                "project name must not be empty".into(),
            ));
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_PROJECT).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO projects (id, name, description, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?4)",
                libsql::params![id.as_str(), name, description, now.to_rfc3339()],
            )
            .await?;

        self.stale().notify(StaleView::Project(id.clone()));

        Ok(Project {
            id,
            name: name.to_string(),
            description: description.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a project by ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the project does not exist.
    pub async fn get_project(&self, id: &str) -> Result<Project, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, description, created_at, updated_at
                 FROM projects WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "project",
            id: id.to_string(),
        })?;
        row_to_project(&row)
    }

    /// List projects ordered by creation date descending.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_projects(&self, limit: u32) -> Result<Vec<Project>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, description, created_at, updated_at
                 FROM projects ORDER BY created_at DESC LIMIT ?1",
                [i64::from(limit)],
            )
            .await?;

        let mut projects = Vec::new();
        while let Some(row) = rows.next().await? {
            projects.push(row_to_project(&row)?);
        }
        Ok(projects)
    }

    /// Update a project's name and/or description with dynamic SET clauses.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if a new name is empty,
    /// `DatabaseError::NotFound` if the project does not exist.
    pub async fn update_project(
        &self,
        project_id: &str,
        update: ProjectUpdate,
    ) -> Result<Project, DatabaseError> {
        if let Some(ref name) = update.name {
            if name.trim().is_empty() {
                return Err(DatabaseError::Validation(
                    "project name must not be empty".into(),
                ));
            }
        }

        // Existence check up front so a no-op update still 404s correctly.
        self.get_project(project_id).await?;

        let now = Utc::now();
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref name) = update.name {
            params.push(libsql::Value::Text(name.clone()));
            sets.push(format!("name = ?{idx}"));
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

        params.push(libsql::Value::Text(now.to_rfc3339()));
        sets.push(format!("updated_at = ?{idx}"));
        idx += 1;

        params.push(libsql::Value::Text(project_id.to_string()));
        let sql = format!("UPDATE projects SET {} WHERE id = ?{idx}", sets.join(", "));

        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.stale()
            .notify(StaleView::Project(project_id.to_string()));

        self.get_project(project_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use crate::updates::project::ProjectUpdateBuilder;

    #[tokio::test]
    async fn create_project_roundtrip() {
        let svc = test_service().await;

        let project = svc
            .create_project("Aurora", Some("AI-native OTA alternative"))
            .await
            .unwrap();

        assert!(project.id.starts_with("prj-"));
        assert_eq!(project.name, "Aurora");
        assert_eq!(project.description.as_deref(), Some("AI-native OTA alternative"));

        let fetched = svc.get_project(&project.id).await.unwrap();
        assert_eq!(fetched.id, project.id);
        assert_eq!(fetched.name, project.name);
        assert_eq!(fetched.description, project.description);
    }

    #[tokio::test]
    async fn create_project_rejects_empty_name() {
        let svc = test_service().await;

        let result = svc.create_project("   ", None).await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));
    }

    #[tokio::test]
    async fn get_missing_project_is_not_found() {
        let svc = test_service().await;

        let result = svc.get_project("prj-deadbeef").await;
        assert!(matches!(
            result,
            Err(DatabaseError::NotFound { entity: "project", .. })
        ));
    }

    #[tokio::test]
    async fn list_projects_newest_first() {
        let svc = test_service().await;

        svc.create_project("First", None).await.unwrap();
        svc.create_project("Second", None).await.unwrap();
        svc.create_project("Third", None).await.unwrap();

        let projects = svc.list_projects(10).await.unwrap();
        assert_eq!(projects.len(), 3);
    }

    #[tokio::test]
    async fn update_project_partial() {
        let svc = test_service().await;

        let project = svc
            .create_project("WisdomOS", Some("Self-improvement platform"))
            .await
            .unwrap();

        let update = ProjectUpdateBuilder::new().name("WisdomOS v2").build();
        let updated = svc.update_project(&project.id, update).await.unwrap();

        assert_eq!(updated.name, "WisdomOS v2");
        assert_eq!(
            updated.description.as_deref(),
            Some("Self-improvement platform")
        );
    }

    #[tokio::test]
    async fn update_project_clears_description() {
        let svc = test_service().await;

        let project = svc
            .create_project("PVT Hostel", Some("Hybrid hostel/co-living"))
            .await
            .unwrap();

        let update = ProjectUpdateBuilder::new().description(None).build();
        let updated = svc.update_project(&project.id, update).await.unwrap();

        assert_eq!(updated.description, None);
    }

    #[tokio::test]
    async fn update_project_rejects_empty_name() {
        let svc = test_service().await;

        let project = svc.create_project("Aurora", None).await.unwrap();
        let update = ProjectUpdateBuilder::new().name("").build();

        let result = svc.update_project(&project.id, update).await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));

        // Prior state untouched
        let fetched = svc.get_project(&project.id).await.unwrap();
        assert_eq!(fetched.name, "Aurora");
    }

    #[tokio::test]
    async fn update_missing_project_is_not_found() {
        let svc = test_service().await;

        let update = ProjectUpdateBuilder::new().name("Ghost").build();
        let result = svc.update_project("prj-deadbeef", update).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }
}
