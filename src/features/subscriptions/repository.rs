use super::models::{CreateSubscriptionDto, Subscription, UpdateSubscriptionDto};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::storage::KeyValueStore;
use crate::shared::utils::{validate_billing_day, validate_price};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// サブスクリプション一覧を保存するキー
pub const SUBSCRIPTIONS_KEY: &str = "velora_data";

/// 保存済みの1件
///
/// 読み込めない要素は一覧から除外するが、書き戻し時にはそのまま残す
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum StoredEntry {
    Parsed(Subscription),
    Unreadable(Value),
}

/// ストアから保存順の要素を読み込む
///
/// 一覧全体が解析できない場合はエラーをログに残して空として扱う
fn load_entries(store: &dyn KeyValueStore) -> AppResult<Vec<StoredEntry>> {
    let Some(raw) = store.get(SUBSCRIPTIONS_KEY)? else {
        return Ok(Vec::new());
    };

    let values = match serde_json::from_str::<Vec<Value>>(&raw) {
        Ok(values) => values,
        Err(e) => {
            log::error!("サブスクリプションデータの解析に失敗しました: {e}");
            return Ok(Vec::new());
        }
    };

    let entries = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match Subscription::deserialize(&value) {
            Ok(subscription) => StoredEntry::Parsed(subscription),
            Err(e) => {
                log::warn!("{index}番目のサブスクリプションを読み込めないためスキップします: {e}");
                StoredEntry::Unreadable(value)
            }
        })
        .collect();
    Ok(entries)
}

/// 要素をストアに書き込む
fn save_entries(store: &mut dyn KeyValueStore, entries: &[StoredEntry]) -> AppResult<()> {
    let json = serde_json::to_string(entries)?;
    store.set(SUBSCRIPTIONS_KEY, &json)
}

fn find_entry<'a>(entries: &'a mut [StoredEntry], id: &str) -> AppResult<&'a mut Subscription> {
    entries
        .iter_mut()
        .find_map(|entry| match entry {
            StoredEntry::Parsed(subscription) if subscription.id == id => Some(subscription),
            _ => None,
        })
        .ok_or_else(|| not_found(id))
}

/// ストアからサブスクリプション一覧を読み込む
///
/// # 引数
/// * `store` - キーバリューストア
///
/// # 戻り値
/// 保存順のサブスクリプション一覧。未保存の場合は空。
/// 読み込めない要素は除外される
pub fn find_all(store: &dyn KeyValueStore) -> AppResult<Vec<Subscription>> {
    Ok(load_entries(store)?
        .into_iter()
        .filter_map(|entry| match entry {
            StoredEntry::Parsed(subscription) => Some(subscription),
            StoredEntry::Unreadable(_) => None,
        })
        .collect())
}

fn not_found(id: &str) -> AppError {
    AppError::not_found(format!("ID {id} のサブスクリプション"))
}

/// IDでサブスクリプションを取得する
///
/// # 引数
/// * `store` - キーバリューストア
/// * `id` - サブスクリプションID
pub fn find_by_id(store: &dyn KeyValueStore, id: &str) -> AppResult<Subscription> {
    find_all(store)?
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| not_found(id))
}

/// サブスクリプションを作成する
///
/// # 引数
/// * `store` - キーバリューストア
/// * `dto` - サブスクリプション作成用DTO
///
/// # 戻り値
/// 新しいIDが割り当てられたサブスクリプション
pub fn create(
    store: &mut dyn KeyValueStore,
    dto: CreateSubscriptionDto,
) -> AppResult<Subscription> {
    validate_price(dto.price)?;

    let subscription = Subscription {
        id: Uuid::new_v4().to_string(),
        name: dto.name,
        price: dto.price,
        day: dto.day,
        category: dto.category,
        color: dto.color,
        logo: dto.logo,
        domain: dto.domain,
        description: dto.description,
        currency: dto.currency,
    };

    let mut entries = load_entries(store)?;
    entries.push(StoredEntry::Parsed(subscription.clone()));
    save_entries(store, &entries)?;

    log::info!(
        "サブスクリプションを作成しました: id={}, name={}",
        subscription.id,
        subscription.name
    );
    Ok(subscription)
}

/// 空文字列は削除として扱う
fn apply_optional(current: &mut Option<String>, update: Option<String>) {
    if let Some(value) = update {
        *current = if value.trim().is_empty() {
            None
        } else {
            Some(value)
        };
    }
}

/// サブスクリプションを更新する
///
/// # 引数
/// * `store` - キーバリューストア
/// * `id` - サブスクリプションID
/// * `dto` - サブスクリプション更新用DTO
///
/// # 戻り値
/// 更新されたサブスクリプション、または失敗時はエラー
pub fn update(
    store: &mut dyn KeyValueStore,
    id: &str,
    dto: UpdateSubscriptionDto,
) -> AppResult<Subscription> {
    if let Some(price) = dto.price {
        validate_price(price)?;
    }

    let mut entries = load_entries(store)?;
    let existing = find_entry(&mut entries, id)?;

    if let Some(name) = dto.name {
        existing.name = name;
    }
    if let Some(price) = dto.price {
        existing.price = price;
    }
    if let Some(day) = dto.day {
        existing.day = day;
    }
    if let Some(category) = dto.category {
        existing.category = category;
    }
    if let Some(color) = dto.color {
        existing.color = color;
    }
    apply_optional(&mut existing.logo, dto.logo);
    apply_optional(&mut existing.domain, dto.domain);
    apply_optional(&mut existing.description, dto.description);

    let updated = existing.clone();
    save_entries(store, &entries)?;

    log::info!("サブスクリプションを更新しました: id={id}");
    Ok(updated)
}

/// サブスクリプションの請求日を移動する（カレンダー上のドラッグ＆ドロップ）
///
/// # 引数
/// * `store` - キーバリューストア
/// * `id` - サブスクリプションID
/// * `new_day` - 移動先の日（1〜31）
pub fn move_to_day(
    store: &mut dyn KeyValueStore,
    id: &str,
    new_day: u32,
) -> AppResult<Subscription> {
    validate_billing_day(new_day)?;

    let mut entries = load_entries(store)?;
    let existing = find_entry(&mut entries, id)?;

    let old_day = existing.day;
    existing.day = new_day;
    let moved = existing.clone();
    save_entries(store, &entries)?;

    log::info!("請求日を移動しました: id={id}, {old_day} -> {new_day}");
    Ok(moved)
}

/// サブスクリプションを削除する
///
/// # 戻り値
/// 成功時はOk(())、存在しない場合はNotFound
pub fn delete(store: &mut dyn KeyValueStore, id: &str) -> AppResult<()> {
    let mut entries = load_entries(store)?;
    let before = entries.len();
    entries.retain(|entry| !matches!(entry, StoredEntry::Parsed(s) if s.id == id));

    if entries.len() == before {
        return Err(not_found(id));
    }

    save_entries(store, &entries)?;
    log::info!("サブスクリプションを削除しました: id={id}");
    Ok(())
}

/// 請求日の昇順に並べ替えた一覧を返す（同日は保存順を維持）
pub fn sorted_by_day(subscriptions: &[Subscription]) -> Vec<Subscription> {
    let mut sorted = subscriptions.to_vec();
    sorted.sort_by_key(|s| s.day);
    sorted
}

/// 指定日に請求されるサブスクリプションを保存順で返す
pub fn find_by_day(subscriptions: &[Subscription], day: u32) -> Vec<&Subscription> {
    subscriptions.iter().filter(|s| s.day == day).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::subscriptions::models::Category;
    use crate::shared::storage::{MemoryKeyValueStore, SqliteKeyValueStore};

    fn dto(name: &str, price: f64, day: u32) -> CreateSubscriptionDto {
        CreateSubscriptionDto {
            name: name.to_string(),
            price,
            day,
            category: Category::Entertainment,
            color: "#E50914".to_string(),
            logo: None,
            domain: None,
            description: None,
            currency: None,
        }
    }

    #[test]
    fn test_find_all_on_empty_store() {
        let store = MemoryKeyValueStore::new();
        assert!(find_all(&store).unwrap().is_empty());
    }

    #[test]
    fn test_find_all_with_corrupt_data() {
        let mut store = MemoryKeyValueStore::new();
        store.set(SUBSCRIPTIONS_KEY, "{not json").unwrap();

        assert!(find_all(&store).unwrap().is_empty());
        // 壊れたデータは書き込みが発生するまで残す
        assert_eq!(
            store.get(SUBSCRIPTIONS_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    const MIXED_RECORDS: &str = r##"[
        {"id":"a","name":"Netflix","price":13.49,"day":5,"category":"Divertissement","color":"#E50914"},
        {"id":"b","name":"Loyer","price":800,"day":null,"category":"Factures","color":"#64748b"},
        {"id":"c","name":"Gym","price":29.9,"day":12,"category":"Sport","color":"#FF4E00"}
    ]"##;

    #[test]
    fn test_find_all_skips_unreadable_records() {
        let mut store = MemoryKeyValueStore::new();
        store.set(SUBSCRIPTIONS_KEY, MIXED_RECORDS).unwrap();

        let all = find_all(&store).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "a");
    }

    #[test]
    fn test_writes_keep_unreadable_records() {
        let mut store = MemoryKeyValueStore::new();
        store.set(SUBSCRIPTIONS_KEY, MIXED_RECORDS).unwrap();

        let created = create(&mut store, dto("New", 1.0, 3)).unwrap();
        move_to_day(&mut store, "a", 20).unwrap();
        assert!(matches!(
            delete(&mut store, "b"),
            Err(AppError::NotFound(_))
        ));

        let names: Vec<String> = find_all(&store)
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Netflix", "New"]);
        assert_eq!(find_by_id(&store, "a").unwrap().day, 20);

        // 読み込めない要素も保存順のまま残る
        let raw = store.get(SUBSCRIPTIONS_KEY).unwrap().unwrap();
        let stored: Vec<Value> = serde_json::from_str(&raw).unwrap();
        let ids: Vec<&str> = stored.iter().filter_map(|v| v["id"].as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", created.id.as_str()]);
        assert!(stored[1]["day"].is_null());
        assert_eq!(stored[2]["category"], "Sport");
    }

    #[test]
    fn test_create_and_find() {
        let mut store = SqliteKeyValueStore::open_in_memory().unwrap();

        let netflix = create(&mut store, dto("Netflix", 15.0, 5)).unwrap();
        let gym = create(&mut store, dto("Basic-Fit", 20.0, 2)).unwrap();

        assert_ne!(netflix.id, gym.id);
        assert!(Uuid::parse_str(&netflix.id).is_ok());

        let all = find_all(&store).unwrap();
        assert_eq!(all.len(), 2);
        // 保存順を維持する
        assert_eq!(all[0].name, "Netflix");
        assert_eq!(all[1].name, "Basic-Fit");

        let found = find_by_id(&store, &gym.id).unwrap();
        assert_eq!(found, gym);
    }

    #[test]
    fn test_create_rejects_negative_price() {
        let mut store = MemoryKeyValueStore::new();
        let result = create(&mut store, dto("Broken", -1.0, 5));
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(find_all(&store).unwrap().is_empty());
    }

    #[test]
    fn test_find_by_id_not_found() {
        let store = MemoryKeyValueStore::new();
        let error = find_by_id(&store, "missing").unwrap_err();
        assert!(matches!(error, AppError::NotFound(_)));
        assert_eq!(
            error.user_message(),
            "ID missing のサブスクリプションが見つかりません"
        );
    }

    #[test]
    fn test_update_partial_fields() {
        let mut store = MemoryKeyValueStore::new();
        let mut input = dto("Spotify", 10.99, 12);
        input.logo = Some("https://cdn.simpleicons.org/spotify/1DB954".to_string());
        input.domain = Some("spotify.com".to_string());
        let created = create(&mut store, input).unwrap();

        let updated = update(
            &mut store,
            &created.id,
            UpdateSubscriptionDto {
                price: Some(11.99),
                logo: Some(String::new()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Spotify");
        assert_eq!(updated.price, 11.99);
        assert_eq!(updated.logo, None);
        assert_eq!(updated.domain.as_deref(), Some("spotify.com"));
        assert_eq!(find_by_id(&store, &created.id).unwrap(), updated);
    }

    #[test]
    fn test_update_not_found() {
        let mut store = MemoryKeyValueStore::new();
        let result = update(&mut store, "missing", UpdateSubscriptionDto::default());
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_move_to_day() {
        let mut store = MemoryKeyValueStore::new();
        let created = create(&mut store, dto("Netflix", 15.0, 5)).unwrap();

        let moved = move_to_day(&mut store, &created.id, 20).unwrap();
        assert_eq!(moved.day, 20);
        assert_eq!(find_by_id(&store, &created.id).unwrap().day, 20);

        assert!(move_to_day(&mut store, &created.id, 0).is_err());
        assert!(matches!(
            move_to_day(&mut store, "missing", 3),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete() {
        let mut store = MemoryKeyValueStore::new();
        let netflix = create(&mut store, dto("Netflix", 15.0, 5)).unwrap();
        let gym = create(&mut store, dto("Basic-Fit", 20.0, 2)).unwrap();

        delete(&mut store, &netflix.id).unwrap();

        let remaining = find_all(&store).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, gym.id);

        assert!(matches!(
            delete(&mut store, &netflix.id),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_sorted_by_day_is_stable() {
        let mut store = MemoryKeyValueStore::new();
        create(&mut store, dto("A", 1.0, 15)).unwrap();
        create(&mut store, dto("B", 1.0, 3)).unwrap();
        create(&mut store, dto("C", 1.0, 15)).unwrap();

        let sorted = sorted_by_day(&find_all(&store).unwrap());
        let names: Vec<&str> = sorted.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_find_by_day() {
        let mut store = MemoryKeyValueStore::new();
        create(&mut store, dto("Netflix", 15.0, 5)).unwrap();
        create(&mut store, dto("Disney+", 8.99, 5)).unwrap();
        create(&mut store, dto("Spotify", 10.99, 12)).unwrap();

        let all = find_all(&store).unwrap();
        let fifth: Vec<&str> = find_by_day(&all, 5)
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(fifth, vec!["Netflix", "Disney+"]);
        assert!(find_by_day(&all, 31).is_empty());
    }
}
