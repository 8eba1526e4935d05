//! `goyaku lookup` - look up meanings for words.

use anyhow::Result;

use goyaku_core::Dictionary;

use crate::bootstrap::CliContext;

/// Resolve a dictionary and print `word<TAB>meaning` per word.
///
/// A miss prints `-` so the output stays columnar; misses are not errors.
pub async fn execute(ctx: &CliContext, words: &[String]) -> Result<()> {
    let dict = Dictionary::load(&ctx.resolver).await;

    for word in words {
        let meaning = dict.lookup(word);
        if meaning.is_empty() {
            println!("{word}\t-");
        } else {
            println!("{word}\t{meaning}");
        }
    }

    Ok(())
}
