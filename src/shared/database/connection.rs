use crate::shared::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

/// データベース接続を初期化し、テーブルを作成する
///
/// # 引数
/// * `database_path` - データベースファイルのパス
///
/// # 戻り値
/// データベース接続、または失敗時はエラー
///
/// # 処理内容
/// 1. 親ディレクトリの確保
/// 2. データベース接続の開設
/// 3. テーブル作成
pub fn initialize_database(database_path: &Path) -> AppResult<Connection> {
    if let Some(parent) = database_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            log::info!("データディレクトリを作成: {parent:?}");
        }
    }

    let conn = Connection::open(database_path)?;
    create_tables(&conn)?;

    log::info!("データベースを初期化しました: {database_path:?}");

    Ok(conn)
}

/// メモリ上のデータベースを初期化する（テスト・一時利用向け）
pub fn initialize_in_memory_database() -> AppResult<Connection> {
    let conn = Connection::open_in_memory()?;
    create_tables(&conn)?;
    Ok(conn)
}

/// データベーステーブルを作成する
///
/// # 引数
/// * `conn` - データベース接続
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラー
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}
