use anyhow::Context;
use mrp_config::MrpConfig;
use mrp_db::MrpDb;

use crate::cli::GlobalFlags;
use crate::context::ensure_parent_dir;
use crate::output::output;

/// Initialize the local database: create the parent directory and run
/// migrations by opening the database once.
pub async fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = MrpConfig::load_with_dotenv().context("failed to load configuration")?;
    let db_path = flags
        .db
        .clone()
        .unwrap_or_else(|| config.database.path.clone());
    ensure_parent_dir(&db_path)?;

    MrpDb::open_local(&db_path)
        .await
        .with_context(|| format!("failed to initialize database at '{db_path}'"))?;

    output(
        &serde_json::json!({ "initialized": true, "database": db_path }),
        flags.format,
    )
}
