//! Application context: loaded config + an open service.

use anyhow::Context;
use mrp_config::MrpConfig;
use mrp_db::service::MrpService;
use mrp_db::stale::StaleViewNotifier;

use crate::cli::GlobalFlags;

pub struct AppContext {
    pub service: MrpService,
    pub config: MrpConfig,
}

impl AppContext {
    /// Load configuration and open the database.
    ///
    /// The `--db` flag overrides the configured `database.path`.
    pub async fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = MrpConfig::load_with_dotenv().context("failed to load configuration")?;
        let db_path = flags
            .db
            .clone()
            .unwrap_or_else(|| config.database.path.clone());
        ensure_parent_dir(&db_path)?;

        let service = MrpService::new_local(&db_path, StaleViewNotifier::disabled())
            .await
            .with_context(|| format!("failed to open database at '{db_path}'"))?;
        tracing::debug!("opened database at {db_path}");

        Ok(Self { service, config })
    }
}

/// Create the database's parent directory if it doesn't exist yet.
pub fn ensure_parent_dir(db_path: &str) -> anyhow::Result<()> {
    if db_path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = std::path::Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
        }
    }
    Ok(())
}
