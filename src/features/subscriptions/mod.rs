/// サブスクリプション管理機能モジュール
///
/// このモジュールは、サブスクリプションの作成、読み取り、更新、削除機能を提供します。
pub mod commands;
pub mod models;
pub mod repository;

pub use models::{
    Category, CreateSubscriptionDto, Subscription, SubscriptionForm, UpdateSubscriptionDto,
};
