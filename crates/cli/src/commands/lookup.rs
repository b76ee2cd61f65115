use anyhow::Result;
use catalog_lookup_core::MatchTier;

use crate::context::AppContext;

pub(crate) async fn run_resolve(
    ctx: &AppContext,
    query: &str,
    tier: Option<MatchTier>,
) -> Result<()> {
    match ctx.lookup().resolve(query, tier).await? {
        Some(entry) => println!("{}", serde_json::to_string_pretty(&entry)?),
        None => println!("not found"),
    }
    Ok(())
}

pub(crate) async fn run_search(
    ctx: &AppContext,
    keyword: &str,
    limit: Option<usize>,
    tier: Option<MatchTier>,
) -> Result<()> {
    let outcome = ctx.lookup().search(keyword, limit, tier).await?;
    let entries: Vec<_> = outcome.entries().collect();
    let body = serde_json::json!({ "total": outcome.total, "entries": entries });
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

pub(crate) async fn run_lookup(
    ctx: &AppContext,
    query: &str,
    limit: Option<usize>,
    tier: Option<MatchTier>,
) -> Result<()> {
    let outcome = ctx.lookup().lookup(query, limit, tier).await?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
