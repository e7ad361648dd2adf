//! Source log repository — CRUD + conjunctive filtered retrieval + derived counts.
//!
//! A source may optionally link to a step, but only to a step of the same
//! run. Per-step counts are recomputed with `COUNT(*)` on every read, never
//! stored.

use chrono::{NaiveDate, Utc};

use mrp_core::entities::Source;
use mrp_core::enums::{Confidence, MetricCategory, SourceType};
use mrp_core::ids::PREFIX_SOURCE;
use mrp_core::progress::StepSourceCount;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_date, parse_optional_enum};
use crate::service::MrpService;
use crate::stale::StaleView;
use crate::updates::source::SourceUpdate;

/// Input for [`MrpService::create_source`]. `confidence` defaults to medium
/// when unspecified.
#[derive(Debug, Clone)]
pub struct NewSource {
    pub research_run_id: String,
    pub research_step_id: Option<String>,
    pub project_id: Option<String>,
    pub title: String,
    pub url: Option<String>,
    pub citation: Option<String>,
    pub source_type: SourceType,
    pub confidence: Option<Confidence>,
    pub metric_category: Option<MetricCategory>,
    pub publisher: Option<String>,
    pub year: Option<i32>,
    pub geography: Option<String>,
    pub key_figures: Option<String>,
    pub usage_notes: Option<String>,
    pub methodology: Option<String>,
    pub limitations: Option<String>,
    pub date_accessed: Option<NaiveDate>,
}

impl NewSource {
    /// Minimal input: the three required fields, everything else unset.
    #[must_use]
    pub fn new(research_run_id: impl Into<String>, title: impl Into<String>, source_type: SourceType) -> Self {
        Self {
            research_run_id: research_run_id.into(),
            research_step_id: None,
            project_id: None,
            title: title.into(),
            url: None,
            citation: None,
            source_type,
            confidence: None,
            metric_category: None,
            publisher: None,
            year: None,
            geography: None,
            key_figures: None,
            usage_notes: None,
            methodology: None,
            limitations: None,
            date_accessed: None,
        }
    }
}

/// Filter criteria for source listing. Filters compose conjunctively (AND).
#[derive(Debug, Default)]
pub struct SourceFilter {
    pub research_step_id: Option<String>,
    pub confidence: Option<Confidence>,
    pub source_type: Option<SourceType>,
}

const SOURCE_COLUMNS: &str = "id, research_run_id, research_step_id, project_id, title, url, citation, \
     source_type, confidence, metric_category, publisher, year, geography, key_figures, \
     usage_notes, methodology, limitations, date_accessed, created_at, updated_at";

fn row_to_source(row: &libsql::Row) -> Result<Source, DatabaseError> {
    let metric_category = get_opt_string(row, 9)?;
    let date_accessed = get_opt_string(row, 17)?;
    let year = row.get::<Option<i64>>(11)?;
    Ok(Source {
        id: row.get::<String>(0)?,
        research_run_id: row.get::<String>(1)?,
        research_step_id: get_opt_string(row, 2)?,
        project_id: get_opt_string(row, 3)?,
        title: row.get::<String>(4)?,
        url: get_opt_string(row, 5)?,
        citation: get_opt_string(row, 6)?,
        source_type: parse_enum(&row.get::<String>(7)?)?,
        confidence: parse_enum(&row.get::<String>(8)?)?,
        metric_category: parse_optional_enum(metric_category.as_deref())?,
        publisher: get_opt_string(row, 10)?,
        year: year
            .map(i32::try_from)
            .transpose()
            .map_err(|_| DatabaseError::Query("year out of range".into()))?,
        geography: get_opt_string(row, 12)?,
        key_figures: get_opt_string(row, 13)?,
        usage_notes: get_opt_string(row, 14)?,
        methodology: get_opt_string(row, 15)?,
        limitations: get_opt_string(row, 16)?,
        date_accessed: parse_optional_date(date_accessed.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(18)?)?,
        updated_at: parse_datetime(&row.get::<String>(19)?)?,
    })
}

impl MrpService {
    /// Reject a step link that points outside the source's run.
    async fn check_step_link(&self, step_id: &str, run_id: &str) -> Result<(), DatabaseError> {
        let step = self.get_step(step_id).await?;
        if step.research_run_id != run_id {
            return Err(DatabaseError::Validation(format!(
                "step {step_id} belongs to run {}, not run {run_id}",
                step.research_run_id
            )));
        }
        Ok(())
    }

    /// Create a source log entry.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if `title` is empty or the step
    /// link points outside the run, `DatabaseError::NotFound` if the run or
    /// linked step does not exist.
    pub async fn create_source(&self, input: NewSource) -> Result<Source, DatabaseError> {
        if input.title.trim().is_empty() {
            return Err(DatabaseError::Validation(
                "source title must not be empty".into(),
            ));
        }
        self.get_run(&input.research_run_id).await?;
        if let Some(ref step_id) = input.research_step_id {
            self.check_step_link(step_id, &input.research_run_id).await?;
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_SOURCE).await?;
        let confidence = input.confidence.unwrap_or_default();

        self.db()
            .conn()
            .execute(
                "INSERT INTO sources (id, research_run_id, research_step_id, project_id, title, url, citation,
                     source_type, confidence, metric_category, publisher, year, geography, key_figures,
                     usage_notes, methodology, limitations, date_accessed, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?19)",
                libsql::params![
                    id.as_str(),
                    input.research_run_id.as_str(),
                    input.research_step_id.as_deref(),
                    input.project_id.as_deref(),
                    input.title.as_str(),
                    input.url.as_deref(),
                    input.citation.as_deref(),
                    input.source_type.as_str(),
                    confidence.as_str(),
                    input.metric_category.map(MetricCategory::as_str),
                    input.publisher.as_deref(),
                    input.year.map(i64::from),
                    input.geography.as_deref(),
                    input.key_figures.as_deref(),
                    input.usage_notes.as_deref(),
                    input.methodology.as_deref(),
                    input.limitations.as_deref(),
                    input.date_accessed.map(|d| d.to_string()),
                    now.to_rfc3339()
                ],
            )
            .await?;

        self.stale()
            .notify(StaleView::Run(input.research_run_id.clone()));

        Ok(Source {
            id,
            research_run_id: input.research_run_id,
            research_step_id: input.research_step_id,
            project_id: input.project_id,
            title: input.title,
            url: input.url,
            citation: input.citation,
            source_type: input.source_type,
            confidence,
            metric_category: input.metric_category,
            publisher: input.publisher,
            year: input.year,
            geography: input.geography,
            key_figures: input.key_figures,
            usage_notes: input.usage_notes,
            methodology: input.methodology,
            limitations: input.limitations,
            date_accessed: input.date_accessed,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a source by ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the source does not exist.
    pub async fn get_source(&self, id: &str) -> Result<Source, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SOURCE_COLUMNS} FROM sources WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "source",
            id: id.to_string(),
        })?;
        row_to_source(&row)
    }

    /// Partially update a source with dynamic SET clauses.
    ///
    /// Always refreshes `updated_at`. Re-linking a step is validated against
    /// the same-run invariant.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the source (or a newly linked
    /// step) does not exist, `DatabaseError::Validation` on a cross-run link
    /// or empty title.
    pub async fn update_source(
        &self,
        source_id: &str,
        update: SourceUpdate,
    ) -> Result<Source, DatabaseError> {
        if let Some(ref title) = update.title {
            if title.trim().is_empty() {
                return Err(DatabaseError::Validation(
                    "source title must not be empty".into(),
                ));
            }
        }

        let existing = self.get_source(source_id).await?;
        if let Some(Some(ref step_id)) = update.research_step_id {
            self.check_step_link(step_id, &existing.research_run_id)
                .await?;
        }

        let now = Utc::now();
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        let mut push_opt_text = |column: &str, value: &Option<String>, sets: &mut Vec<String>, params: &mut Vec<libsql::Value>| {
            match value {
                Some(v) => params.push(libsql::Value::Text(v.clone())),
                None => params.push(libsql::Value::Null),
            }
            sets.push(format!("{column} = ?{idx}"));
            idx += 1;
        };

        if let Some(ref step_id) = update.research_step_id {
            push_opt_text("research_step_id", step_id, &mut sets, &mut params);
        }
        if let Some(ref url) = update.url {
            push_opt_text("url", url, &mut sets, &mut params);
        }
        if let Some(ref citation) = update.citation {
            push_opt_text("citation", citation, &mut sets, &mut params);
        }
        if let Some(ref publisher) = update.publisher {
            push_opt_text("publisher", publisher, &mut sets, &mut params);
        }
        if let Some(ref geography) = update.geography {
            push_opt_text("geography", geography, &mut sets, &mut params);
        }
        if let Some(ref key_figures) = update.key_figures {
            push_opt_text("key_figures", key_figures, &mut sets, &mut params);
        }
        if let Some(ref usage_notes) = update.usage_notes {
            push_opt_text("usage_notes", usage_notes, &mut sets, &mut params);
        }
        if let Some(ref methodology) = update.methodology {
            push_opt_text("methodology", methodology, &mut sets, &mut params);
        }
        if let Some(ref limitations) = update.limitations {
            push_opt_text("limitations", limitations, &mut sets, &mut params);
        }
        if let Some(ref metric_category) = update.metric_category {
            push_opt_text(
                "metric_category",
                &metric_category.map(|m| m.as_str().to_string()),
                &mut sets,
                &mut params,
            );
        }
        if let Some(ref date_accessed) = update.date_accessed {
            push_opt_text(
                "date_accessed",
                &date_accessed.map(|d| d.to_string()),
                &mut sets,
                &mut params,
            );
        }
        if let Some(ref year) = update.year {
            match year {
                Some(y) => params.push(libsql::Value::Integer(i64::from(*y))),
                None => params.push(libsql::Value::Null),
            }
            sets.push(format!("year = ?{idx}"));
            idx += 1;
        }
        if let Some(ref title) = update.title {
            params.push(libsql::Value::Text(title.clone()));
            sets.push(format!("title = ?{idx}"));
            idx += 1;
        }
        if let Some(source_type) = update.source_type {
            params.push(libsql::Value::Text(source_type.as_str().to_string()));
            sets.push(format!("source_type = ?{idx}"));
            idx += 1;
        }
        if let Some(confidence) = update.confidence {
            params.push(libsql::Value::Text(confidence.as_str().to_string()));
            sets.push(format!("confidence = ?{idx}"));
            idx += 1;
        }

        params.push(libsql::Value::Text(now.to_rfc3339()));
        sets.push(format!("updated_at = ?{idx}"));
        idx += 1;

        params.push(libsql::Value::Text(source_id.to_string()));
        let sql = format!("UPDATE sources SET {} WHERE id = ?{idx}", sets.join(", "));

        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.stale()
            .notify(StaleView::Run(existing.research_run_id.clone()));

        self.get_source(source_id).await
    }

    /// Delete a source. Immediate and unconditional; never touches step or
    /// run rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the source does not exist.
    pub async fn delete_source(&self, source_id: &str) -> Result<(), DatabaseError> {
        let source = self.get_source(source_id).await?;

        self.db()
            .conn()
            .execute("DELETE FROM sources WHERE id = ?1", [source_id])
            .await?;

        self.stale()
            .notify(StaleView::Run(source.research_run_id));

        Ok(())
    }

    /// List a run's sources, newest first, with optional conjunctive filters.
    ///
    /// A pure read; returns the full filtered set (no pagination).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_sources(
        &self,
        run_id: &str,
        filter: &SourceFilter,
    ) -> Result<Vec<Source>, DatabaseError> {
        let mut conditions = vec!["research_run_id = ?1".to_string()];
        let mut params: Vec<libsql::Value> = vec![libsql::Value::Text(run_id.to_string())];

        if let Some(ref step_id) = filter.research_step_id {
            params.push(libsql::Value::Text(step_id.clone()));
            conditions.push(format!("research_step_id = ?{}", params.len()));
        }
        if let Some(confidence) = filter.confidence {
            params.push(libsql::Value::Text(confidence.as_str().to_string()));
            conditions.push(format!("confidence = ?{}", params.len()));
        }
        if let Some(source_type) = filter.source_type {
            params.push(libsql::Value::Text(source_type.as_str().to_string()));
            conditions.push(format!("source_type = ?{}", params.len()));
        }

        let sql = format!(
            "SELECT {SOURCE_COLUMNS} FROM sources WHERE {} ORDER BY created_at DESC",
            conditions.join(" AND ")
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut sources = Vec::new();
        while let Some(row) = rows.next().await? {
            sources.push(row_to_source(&row)?);
        }
        Ok(sources)
    }

    /// Count the sources linked to one step, recomputed on every call.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_sources_for_step(&self, step_id: &str) -> Result<u32, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COUNT(*) FROM sources WHERE research_step_id = ?1",
                [step_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        u32::try_from(row.get::<i64>(0)?)
            .map_err(|_| DatabaseError::Query("source count out of range".into()))
    }

    /// Per-step source counts for a run (steps with zero sources omitted).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn source_counts_by_step(
        &self,
        run_id: &str,
    ) -> Result<Vec<StepSourceCount>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT research_step_id, COUNT(*) FROM sources
                 WHERE research_run_id = ?1 AND research_step_id IS NOT NULL
                 GROUP BY research_step_id",
                [run_id],
            )
            .await?;

        let mut counts = Vec::new();
        while let Some(row) = rows.next().await? {
            counts.push(StepSourceCount {
                research_step_id: row.get::<String>(0)?,
                count: u32::try_from(row.get::<i64>(1)?)
                    .map_err(|_| DatabaseError::Query("source count out of range".into()))?,
            });
        }
        Ok(counts)
    }
}
