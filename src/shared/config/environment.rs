use crate::shared::errors::{AppError, AppResult};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use std::path::PathBuf;

/// アプリケーションの実行環境を表す列挙型
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 開発環境
    Development,
    /// プロダクション環境
    Production,
}

/// 環境設定を管理する構造体
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    /// 実行環境
    pub environment: String,
    /// ログレベル
    pub log_level: String,
}

impl EnvironmentConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        let environment = get_environment();
        let debug_mode = environment == Environment::Development;
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| {
            if debug_mode {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

        Self {
            environment: format!("{environment:?}").to_lowercase(),
            log_level,
        }
    }

    /// 設定されたログレベルをLevelFilterに変換する
    ///
    /// 不明な値はInfoとして扱う
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.log_level.to_lowercase().as_str() {
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Info,
        }
    }
}

/// 現在の実行環境を判定する
///
/// # 判定ロジック
/// 1. コンパイル時埋め込み環境変数を最優先
/// 2. 実行時環境変数 ENVIRONMENT を確認
/// 3. デバッグビルドの場合は Development
/// 4. リリースビルドの場合は Production
pub fn get_environment() -> Environment {
    if let Some(embedded_env) = option_env!("EMBEDDED_ENVIRONMENT") {
        let env = match embedded_env {
            "production" => Environment::Production,
            _ => Environment::Development,
        };
        log::debug!("環境判定: コンパイル時埋め込み値を使用 -> {embedded_env} -> {env:?}");
        return env;
    }

    if let Ok(env_var) = std::env::var("ENVIRONMENT") {
        let env = match env_var.as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        };
        log::debug!("環境判定: 実行時環境変数を使用 -> {env_var} -> {env:?}");
        return env;
    }

    let env = if cfg!(debug_assertions) {
        Environment::Development
    } else {
        Environment::Production
    };
    log::debug!(
        "環境判定: ビルド設定を使用 -> debug_assertions={} -> {env:?}",
        cfg!(debug_assertions)
    );
    env
}

/// 環境に応じたデータベースファイル名を取得する
///
/// # ファイル名の規則
/// - 開発環境: "dev_velora.db"
/// - プロダクション環境: "velora.db"
pub fn get_database_filename(env: Environment) -> &'static str {
    match env {
        Environment::Development => "dev_velora.db",
        Environment::Production => "velora.db",
    }
}

/// 環境に応じた.envファイルを読み込む
///
/// ログシステムの初期化前に呼ばれるため、結果は標準エラー出力に書く
pub fn load_environment_variables() {
    if let Some(env) = option_env!("EMBEDDED_ENVIRONMENT") {
        eprintln!("コンパイル時埋め込み環境設定を使用: {env}");
        return;
    }

    let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

    let env_file = match environment.as_str() {
        "production" => ".env.production",
        _ => ".env",
    };

    eprintln!("環境: {environment}, 読み込み対象: {env_file}");

    match dotenv::from_filename(env_file) {
        Ok(_) => {
            eprintln!("{env_file}ファイルを読み込みました");
        }
        Err(_) => {
            // 環境固有のファイルがない場合は、デフォルトの.envを試行
            if env_file != ".env" && dotenv::dotenv().is_ok() {
                eprintln!("{env_file}が見つからないため、デフォルトの.envファイルを読み込みました");
            } else {
                eprintln!("環境変数ファイルが見つかりません。直接設定された環境変数を使用します。");
            }
        }
    }
}

/// ログシステムを初期化する
///
/// # 処理内容
/// 1. 環境設定を取得
/// 2. ログレベルを設定
/// 3. env_loggerを初期化
pub fn initialize_logging_system() {
    let env_config = EnvironmentConfig::from_env();

    env_logger::Builder::from_default_env()
        .filter_level(env_config.level_filter())
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(false)
        .init();

    log::info!(
        "ログシステムを初期化しました: level={}, environment={}",
        env_config.log_level,
        env_config.environment
    );
}

/// 既定のタイムゾーン
pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";

/// 既定の国コード
pub const DEFAULT_COUNTRY: &str = "FR";

/// アプリケーション設定を管理する構造体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// データ保存ディレクトリ
    pub data_dir: PathBuf,
    /// 保存済みの国設定がない場合に使用する国コード
    pub default_country: String,
    /// 「今日」を判定するためのタイムゾーン
    pub timezone: Tz,
    /// 実行環境
    pub environment: Environment,
}

impl AppConfig {
    /// 環境変数からアプリケーション設定を読み込む
    ///
    /// # 戻り値
    /// アプリケーション設定、またはタイムゾーンやデータディレクトリが解決できない場合はエラー
    pub fn from_env() -> AppResult<Self> {
        log::debug!("AppConfig::from_env() - 環境変数の読み込みを開始");

        let data_dir = match std::env::var("VELORA_DATA_DIR") {
            Ok(dir) if !dir.trim().is_empty() => {
                log::debug!("VELORA_DATA_DIR を使用: {dir}");
                PathBuf::from(dir)
            }
            _ => dirs::data_dir()
                .map(|dir| dir.join("velora"))
                .ok_or_else(|| {
                    AppError::configuration("データディレクトリを特定できませんでした")
                })?,
        };

        let default_country = std::env::var("DEFAULT_COUNTRY")
            .map(|code| code.trim().to_uppercase())
            .unwrap_or_else(|_| {
                log::debug!("DEFAULT_COUNTRY が設定されていないため、デフォルト値 '{DEFAULT_COUNTRY}' を使用");
                DEFAULT_COUNTRY.to_string()
            });

        let timezone_name =
            std::env::var("APP_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());
        let timezone = parse_timezone(&timezone_name)?;

        log::debug!("AppConfig::from_env() - 設定の読み込みが完了しました");
        Ok(Self {
            data_dir,
            default_country,
            timezone,
            environment: get_environment(),
        })
    }

    /// 環境に応じたデータベースファイルのパスを取得する
    pub fn database_path(&self) -> PathBuf {
        self.data_dir
            .join(get_database_filename(self.environment.clone()))
    }

    /// 設定タイムゾーンでの今日の日付を取得する
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}

/// タイムゾーン名を解析する
///
/// # 引数
/// * `name` - IANAタイムゾーン名（例: "Europe/Paris"）
pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| AppError::configuration(format!("無効なタイムゾーンです: {name} ({e})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_database_filename() {
        assert_eq!(
            get_database_filename(Environment::Development),
            "dev_velora.db"
        );
        assert_eq!(get_database_filename(Environment::Production), "velora.db");
    }

    #[test]
    fn test_get_environment() {
        // 実際の値はビルド設定に依存
        let env = get_environment();
        assert!(matches!(
            env,
            Environment::Development | Environment::Production
        ));
    }

    #[test]
    fn test_level_filter() {
        let mut config = EnvironmentConfig {
            environment: "development".to_string(),
            log_level: "WARN".to_string(),
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Warn);

        config.log_level = "verbose".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(
            parse_timezone("Europe/Paris").unwrap(),
            chrono_tz::Europe::Paris
        );
        assert_eq!(parse_timezone(" Asia/Tokyo ").unwrap(), chrono_tz::Asia::Tokyo);

        let error = parse_timezone("Mars/Olympus").unwrap_err();
        assert!(matches!(error, AppError::Configuration(_)));
    }

    #[test]
    fn test_database_path() {
        let config = AppConfig {
            data_dir: PathBuf::from("/tmp/velora"),
            default_country: "FR".to_string(),
            timezone: chrono_tz::Europe::Paris,
            environment: Environment::Production,
        };
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/velora/velora.db")
        );
    }

    #[test]
    fn test_load_environment_variables() {
        // パニックしないことを確認
        load_environment_variables();
    }
}
