/// プリセット機能モジュール
///
/// 主要サービスの一覧と、名前からの照合・検索・フォームへの反映を提供します。
pub mod catalog;
pub mod commands;
pub mod models;
pub mod service;

pub use catalog::{find_preset, PRESET_SERVICES};
pub use models::{PresetGroup, PresetService, ServiceIdentity};
pub use service::{
    apply_preset, group_by_category, infer_identity, match_preset, search_presets,
    update_form_name,
};
