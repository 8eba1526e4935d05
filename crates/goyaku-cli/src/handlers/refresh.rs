//! `goyaku refresh` - force a resolution and report the serving tier.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Run one tier resolution and print where the glossary came from.
///
/// A successful remote resolution refreshes the cache as a side effect;
/// falling back to cache or bundled data is reported, not failed.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let resolved = ctx.resolver.resolve().await;

    println!(
        "glossary served from {} tier ({} meanings, {} word mappings)",
        resolved.origin.as_str(),
        resolved.glossary.dic.len(),
        resolved.glossary.word2stem.len()
    );

    Ok(())
}
