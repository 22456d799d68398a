use crate::shared::database::connection::{initialize_database, initialize_in_memory_database};
use crate::shared::errors::AppResult;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::Path;

/// 永続化に使用するキーバリューストアの抽象
///
/// 値はすべて文字列（JSONなど）として保存する
pub trait KeyValueStore: Send {
    /// キーに対応する値を取得する
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// キーに値を保存する（既存値は上書き）
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// キーを削除する（存在しない場合は何もしない）
    fn delete(&mut self, key: &str) -> AppResult<()>;
}

/// SQLiteの `kv_store` テーブルを使うストア
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    /// 既存の接続からストアを作成する
    ///
    /// 接続には `create_tables` 済みであることを前提とする
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// データベースファイルを開いてストアを作成する
    pub fn open(database_path: &Path) -> AppResult<Self> {
        Ok(Self::new(initialize_database(database_path)?))
    }

    /// メモリ上のデータベースでストアを作成する
    pub fn open_in_memory() -> AppResult<Self> {
        Ok(Self::new(initialize_in_memory_database()?))
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        log::debug!("キーを保存しました: key={key}, bytes={}", value.len());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> AppResult<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        log::debug!("キーを削除しました: key={key}, rows={rows_affected}");
        Ok(())
    }
}

/// HashMapベースのストア（テスト・一時利用向け）
#[derive(Debug, Default, Clone)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
