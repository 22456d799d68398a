/// 機能別モジュール
///
/// 各機能モジュールは、その機能に関連するコード（モデル、コマンド、ストア操作、サービス）
/// を含む自己完結型のユニットです。
// 機能モジュールの宣言
pub mod calendar;
pub mod locale;
pub mod logos;
pub mod preferences;
pub mod presets;
pub mod stats;
pub mod subscriptions;
