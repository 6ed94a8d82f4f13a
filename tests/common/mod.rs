#![allow(dead_code)]

use food_delivery_api::{
    db::{create_orm_conn, run_migrations},
    state::AppState,
};
use tempfile::TempDir;

/// A migrated SQLite database in a temporary directory. Keep the `TempDir`
/// alive for as long as the state is used.
pub async fn setup_state() -> anyhow::Result<(TempDir, AppState)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("food_delivery.sqlite");
    let url = format!("sqlite://{}?mode=rwc", path.display());

    let orm = create_orm_conn(&url).await?;
    run_migrations(&orm).await?;

    Ok((dir, AppState::new(orm)))
}
