//! `SQLite` implementation of the `GlossaryCache` trait.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::warn;

use goyaku_core::glossary::{CachedGlossary, Glossary};
use goyaku_core::ports::{CacheError, GlossaryCache};

const DIC_SLOT: &str = "dic";
const WORD2STEM_SLOT: &str = "word2stem";

/// `SQLite` implementation of the `GlossaryCache` trait.
///
/// Stores each map as a JSON blob under its slot in a key-value table.
/// Writes go through one transaction so the two slots change together.
pub struct SqliteGlossaryCache {
    pool: SqlitePool,
}

impl SqliteGlossaryCache {
    /// Create a cache over an already set-up pool.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn read_slot(&self, slot: &str) -> Result<Option<HashMap<String, String>>, CacheError> {
        let row = sqlx::query("SELECT value FROM glossary_kv WHERE slot = ?")
            .bind(slot)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CacheError::Storage(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let json: String = row.get("value");
        match serde_json::from_str(&json) {
            Ok(map) => Ok(Some(map)),
            Err(e) => {
                // An undecodable slot reads as absent so the resolver
                // falls through to the bundled tier
                warn!("cached glossary slot '{slot}' is corrupt: {e}");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl GlossaryCache for SqliteGlossaryCache {
    async fn write(&self, glossary: &Glossary) -> Result<(), CacheError> {
        let dic_json = serde_json::to_string(&glossary.dic)
            .map_err(|e| CacheError::Serialization(e.to_string()))?;
        let word2stem_json = serde_json::to_string(&glossary.word2stem)
            .map_err(|e| CacheError::Serialization(e.to_string()))?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| CacheError::Storage(e.to_string()))?;

        for (slot, json) in [(DIC_SLOT, &dic_json), (WORD2STEM_SLOT, &word2stem_json)] {
            sqlx::query(
                "INSERT OR REPLACE INTO glossary_kv (slot, value, updated_at)
                 VALUES (?, ?, datetime('now'))",
            )
            .bind(slot)
            .bind(json)
            .execute(&mut *tx)
            .await
            .map_err(|e| CacheError::Storage(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| CacheError::Storage(e.to_string()))?;

        Ok(())
    }

    async fn read(&self) -> Result<CachedGlossary, CacheError> {
        Ok(CachedGlossary {
            dic: self.read_slot(DIC_SLOT).await?,
            word2stem: self.read_slot(WORD2STEM_SLOT).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    fn map_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    async fn cache() -> SqliteGlossaryCache {
        SqliteGlossaryCache::new(setup_test_database().await.unwrap())
    }

    #[tokio::test]
    async fn read_of_empty_cache_returns_absent_slots() {
        let cache = cache().await;
        let cached = cache.read().await.unwrap();
        assert!(cached.dic.is_none());
        assert!(cached.word2stem.is_none());
    }

    #[tokio::test]
    async fn write_then_read_round_trips_the_pair() {
        let cache = cache().await;
        let glossary = Glossary::new(
            map_of(&[("goroutine", "軽量スレッド")]),
            map_of(&[("goroutines", "goroutine")]),
        );

        cache.write(&glossary).await.unwrap();
        let cached = cache.read().await.unwrap().into_complete().unwrap();
        assert_eq!(cached, glossary);
    }

    #[tokio::test]
    async fn write_overwrites_prior_values() {
        let cache = cache().await;
        let first = Glossary::new(map_of(&[("slice", "old")]), map_of(&[("slices", "slice")]));
        let second = Glossary::new(
            map_of(&[("slice", "スライス")]),
            map_of(&[("slices", "slice")]),
        );

        cache.write(&first).await.unwrap();
        cache.write(&second).await.unwrap();

        let cached = cache.read().await.unwrap().into_complete().unwrap();
        assert_eq!(cached, second);
    }

    #[tokio::test]
    async fn partial_cache_stays_partial() {
        let cache = cache().await;
        sqlx::query(
            "INSERT INTO glossary_kv (slot, value, updated_at)
             VALUES ('dic', '{\"slice\":\"スライス\"}', datetime('now'))",
        )
        .execute(&cache.pool)
        .await
        .unwrap();

        let cached = cache.read().await.unwrap();
        assert!(cached.dic.is_some());
        assert!(cached.word2stem.is_none());
        assert!(cached.into_complete().is_none());
    }

    #[tokio::test]
    async fn corrupt_slot_reads_as_absent() {
        let cache = cache().await;
        sqlx::query(
            "INSERT INTO glossary_kv (slot, value, updated_at)
             VALUES ('dic', 'not json', datetime('now'))",
        )
        .execute(&cache.pool)
        .await
        .unwrap();

        let cached = cache.read().await.unwrap();
        assert!(cached.dic.is_none());
    }
}
