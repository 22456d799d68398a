/// ロゴ解決機能モジュール
///
/// 明示的なロゴ、ドメインベースのロゴサービス、ファビコンサービス、イニシャルの
/// 順で候補を切り替える状態機械を提供します。
pub mod commands;
pub mod resolver;

pub use resolver::{
    favicon_service_url, initials, logo_service_url, LogoInput, LogoRender, LogoResolver,
    LogoStage,
};
