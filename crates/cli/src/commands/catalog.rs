use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use catalog_lookup_phonetic::is_available;

use crate::context::AppContext;

/// Refresh from `file` with the maintainer listening, and wait for it to
/// index the new rows before exiting.
pub(crate) async fn run_import(ctx: &AppContext, file: &Path) -> Result<()> {
    let catalog = ctx.catalog();
    let maintainer = Arc::new(ctx.maintainer()).spawn(catalog.subscribe());

    let written = catalog.refresh_from_file(file).await?;
    drop(catalog);
    maintainer.await?;

    println!("Imported {written} entries");
    Ok(())
}

pub(crate) async fn run_backfill(ctx: &AppContext) -> Result<()> {
    let written = ctx.maintainer().backfill().await?;
    println!("Backfilled {written} phonetic keys");
    Ok(())
}

pub(crate) async fn run_clear(ctx: &AppContext) -> Result<()> {
    let removed = ctx.catalog().clear().await?;
    println!("Removed {removed} entries");
    Ok(())
}

pub(crate) async fn run_stats(ctx: &AppContext) -> Result<()> {
    let entries = ctx.catalog().count().await?;
    let stats = serde_json::json!({
        "backend": ctx.storage.kind(),
        "entries": entries,
        "phonetic": is_available(ctx.phonetics.as_ref()),
    });
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
