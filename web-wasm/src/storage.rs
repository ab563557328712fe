//! localStorageバックエンド

use fridge_chef_common::error::{Error, Result};
use fridge_chef_common::store::{SavedRecipeStore, StorageBackend, STORAGE_KEY};

/// localStorageをStorageBackendとして注入する
///
/// レコードはシリアライズ済みJSON文字列をそのまま格納する
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageBackend;

impl StorageBackend for LocalStorageBackend {
    fn read(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?
    }

    fn write(&self, payload: &str) -> Result<()> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| Error::Storage("localStorageが利用できません".into()))?;
        storage
            .set_item(STORAGE_KEY, payload)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}

/// 起動時のストア読込
///
/// デコード失敗はコンソールに出して空のまま続行する（ユーザーには出さない）
pub fn load_store() -> SavedRecipeStore<LocalStorageBackend> {
    let mut store = SavedRecipeStore::new(LocalStorageBackend);
    if let Err(e) = store.reload() {
        gloo::console::error!(format!("保存レシピの読込に失敗: {}", e));
    }
    store
}
