// 機能モジュール構造
pub mod features;
pub mod shared;

use chrono::NaiveDate;
use features::locale::Localizer;
use features::preferences;
use features::stats::DashboardSnapshot;
use features::subscriptions::repository;
use log::info;
use shared::config::environment::{initialize_logging_system, load_environment_variables};
use shared::config::AppConfig;
use shared::errors::{AppError, AppResult};
use shared::storage::{KeyValueStore, SqliteKeyValueStore};
use std::sync::{Mutex, MutexGuard};

/// アプリケーション状態（ストアとロケールを保持）
///
/// コマンドはどのスレッドからでも呼ばれるため、可変な状態はMutexで保護する
pub struct AppState {
    pub store: Mutex<Box<dyn KeyValueStore>>,
    pub localizer: Mutex<Localizer>,
    pub config: AppConfig,
}

impl AppState {
    /// ストアと設定からアプリケーション状態を作成する
    ///
    /// 保存済みの国、`DEFAULT_COUNTRY`、フランスの順でロケールを解決する
    pub fn new(store: Box<dyn KeyValueStore>, config: AppConfig) -> AppResult<Self> {
        let saved_country = preferences::load_country(store.as_ref())?;
        let localizer = Localizer::resolve(saved_country, &config.default_country);

        Ok(Self {
            store: Mutex::new(store),
            localizer: Mutex::new(localizer),
            config,
        })
    }

    /// ストアのロックを取得する
    pub fn store(&self) -> AppResult<MutexGuard<'_, Box<dyn KeyValueStore>>> {
        self.store
            .lock()
            .map_err(|e| AppError::concurrency(format!("ストアのロックに失敗しました: {e}")))
    }

    /// ロケールのロックを取得する
    pub fn localizer(&self) -> AppResult<MutexGuard<'_, Localizer>> {
        self.localizer
            .lock()
            .map_err(|e| AppError::concurrency(format!("ロケールのロックに失敗しました: {e}")))
    }
}

/// アプリケーションを起動し、今月のダッシュボードを出力する
pub fn run() -> AppResult<()> {
    // 環境に応じた.envファイルを読み込み（ログシステム初期化前に実行）
    load_environment_variables();
    initialize_logging_system();

    info!("アプリケーション初期化を開始します...");

    let config = AppConfig::from_env()?;
    let database_path = config.database_path();
    info!("データベースを開きます: {}", database_path.display());
    let store = SqliteKeyValueStore::open(&database_path)?;

    let state = AppState::new(Box::new(store), config)?;
    info!("アプリケーション初期化が完了しました");

    let snapshot = dashboard_snapshot(&state, state.config.today())?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// 基準日のダッシュボードを現在のロケールで組み立てる
fn dashboard_snapshot(state: &AppState, today: NaiveDate) -> AppResult<DashboardSnapshot> {
    let subscriptions = repository::find_all(&**state.store()?)?;
    let localizer = state.localizer()?;
    Ok(DashboardSnapshot::build(&subscriptions, today, &localizer))
}
