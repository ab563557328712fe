//! 保存レシピストア
//!
//! タイトルをキーとする保存レシピのコレクション。
//! ストレージバックエンドは注入式（本番はlocalStorage、テストはメモリ）。
//! 変更のたびにリスト全体を再エンコードして同期的に書き戻す。

use std::cell::RefCell;

use crate::error::{Error, Result};
use crate::types::{Recipe, SavedRecipe};

/// 永続化レコードのキー名（バージョニングなし、形式変更時はレコードを消す）
pub const STORAGE_KEY: &str = "savedRecipes";

/// 星評価の上限
pub const MAX_RATING: u8 = 5;

/// ストレージバックエンド
///
/// readはレコードが無ければNone。writeはシリアライズ済みJSONをそのまま格納する。
pub trait StorageBackend {
    fn read(&self) -> Option<String>;
    fn write(&self, payload: &str) -> Result<()>;
}

impl<B: StorageBackend> StorageBackend for &B {
    fn read(&self) -> Option<String> {
        (*self).read()
    }

    fn write(&self, payload: &str) -> Result<()> {
        (*self).write(payload)
    }
}

/// テスト用メモリバックエンド
#[derive(Debug, Default)]
pub struct MemoryBackend {
    cell: RefCell<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期レコード付きで作成（破損データのテスト用）
    pub fn with_record(payload: &str) -> Self {
        Self {
            cell: RefCell::new(Some(payload.to_string())),
        }
    }

    pub fn record(&self) -> Option<String> {
        self.cell.borrow().clone()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> Option<String> {
        self.cell.borrow().clone()
    }

    fn write(&self, payload: &str) -> Result<()> {
        *self.cell.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

/// 保存レシピストア
///
/// UIスレッドからのみ変更される前提（並行書き込みなし）
pub struct SavedRecipeStore<B: StorageBackend> {
    backend: B,
    entries: Vec<SavedRecipe>,
}

impl<B: StorageBackend> SavedRecipeStore<B> {
    /// 空のストアを作成（まだ何も読み込まない）
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            entries: Vec::new(),
        }
    }

    /// 永続化済みコレクションを読み込む
    ///
    /// デコード失敗時はコレクションを空にリセットしてエラーを返す。
    /// 呼び出し側はログに出すだけでよく、ユーザーには見せない。
    pub fn reload(&mut self) -> Result<()> {
        self.entries.clear();
        let Some(raw) = self.backend.read() else {
            return Ok(());
        };
        self.entries = serde_json::from_str(&raw)?;
        Ok(())
    }

    pub fn entries(&self) -> &[SavedRecipe] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// タイトルが一致するレシピが保存済みか
    pub fn is_saved(&self, title: &str) -> bool {
        self.entries.iter().any(|e| e.recipe.title == title)
    }

    /// レシピを保存（rating=0で追加）
    ///
    /// 同タイトルが既にあれば何もしない（先勝ち。内容が違っても黙って捨てる）
    pub fn save(&mut self, recipe: Recipe) -> Result<()> {
        if self.is_saved(&recipe.title) {
            return Ok(());
        }
        self.entries.push(SavedRecipe { recipe, rating: 0 });
        self.persist()
    }

    /// タイトルが一致するエントリを削除（無ければ何もしない）
    pub fn unsave(&mut self, title: &str) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e.recipe.title != title);
        if self.entries.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// 星評価を設定（対象が無ければ何もしない）
    ///
    /// 上限5でクランプする。UIは1-5しか渡さないが、
    /// ストア境界でも範囲を保証しておく。
    pub fn rate(&mut self, title: &str, rating: u8) -> Result<()> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.recipe.title == title) else {
            return Ok(());
        };
        entry.rating = rating.min(MAX_RATING);
        self.persist()
    }

    /// リスト全体を再エンコードして書き戻す
    fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.entries)?;
        self.backend.write(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str) -> Recipe {
        Recipe {
            title: title.to_string(),
            rations: 2,
            total_time_min: 20,
            uses: vec!["tomate".to_string()],
            steps: vec!["Paso 1.".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_save_and_is_saved() {
        let mut store = SavedRecipeStore::new(MemoryBackend::new());
        store.save(recipe("Pasta")).expect("保存失敗");

        assert!(store.is_saved("Pasta"));
        assert!(!store.is_saved("Sopa"));
        assert_eq!(store.entries()[0].rating, 0);
    }

    #[test]
    fn test_save_duplicate_title_first_wins() {
        // 同タイトルの再保存は既存の内容も評価も変えない
        let mut store = SavedRecipeStore::new(MemoryBackend::new());
        store.save(recipe("Pasta")).expect("保存失敗");
        store.rate("Pasta", 4).expect("評価失敗");

        let mut modified = recipe("Pasta");
        modified.total_time_min = 99;
        store.save(modified).expect("保存失敗");

        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].recipe.total_time_min, 20);
        assert_eq!(store.entries()[0].rating, 4);
    }

    #[test]
    fn test_unsave() {
        let mut store = SavedRecipeStore::new(MemoryBackend::new());
        store.save(recipe("Pasta")).expect("保存失敗");
        store.unsave("Pasta").expect("削除失敗");

        assert!(store.is_empty());
    }

    #[test]
    fn test_unsave_absent_is_noop() {
        let mut store = SavedRecipeStore::new(MemoryBackend::new());
        store.save(recipe("Pasta")).expect("保存失敗");
        store.unsave("Sopa").expect("削除失敗");

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unsave_then_save_resets_rating() {
        let mut store = SavedRecipeStore::new(MemoryBackend::new());
        store.save(recipe("Pasta")).expect("保存失敗");
        store.rate("Pasta", 5).expect("評価失敗");

        store.unsave("Pasta").expect("削除失敗");
        store.save(recipe("Pasta")).expect("保存失敗");

        assert_eq!(store.entries()[0].rating, 0);
    }

    #[test]
    fn test_rate_updates_only_target() {
        let mut store = SavedRecipeStore::new(MemoryBackend::new());
        store.save(recipe("Pasta")).expect("保存失敗");
        store.save(recipe("Sopa")).expect("保存失敗");
        store.rate("Sopa", 3).expect("評価失敗");

        assert_eq!(store.entries()[0].rating, 0);
        assert_eq!(store.entries()[1].rating, 3);
    }

    #[test]
    fn test_rate_absent_is_noop() {
        let mut store = SavedRecipeStore::new(MemoryBackend::new());
        store.rate("Nada", 5).expect("評価失敗");

        assert!(store.is_empty());
    }

    #[test]
    fn test_rate_clamps_to_max() {
        let mut store = SavedRecipeStore::new(MemoryBackend::new());
        store.save(recipe("Pasta")).expect("保存失敗");
        store.rate("Pasta", 200).expect("評価失敗");

        assert_eq!(store.entries()[0].rating, MAX_RATING);
    }

    #[test]
    fn test_mutations_write_through() {
        let mut store = SavedRecipeStore::new(MemoryBackend::new());
        store.save(recipe("Pasta")).expect("保存失敗");

        let record = store.backend.record().expect("レコードが書かれていない");
        assert!(record.contains("\"Pasta\""));

        store.unsave("Pasta").expect("削除失敗");
        let record = store.backend.record().expect("レコードが書かれていない");
        assert_eq!(record, "[]");
    }

    #[test]
    fn test_reload_roundtrip() {
        let backend = MemoryBackend::new();
        {
            let mut store = SavedRecipeStore::new(&backend);
            store.save(recipe("Pasta")).expect("保存失敗");
            store.save(recipe("Sopa")).expect("保存失敗");
            store.rate("Sopa", 2).expect("評価失敗");
        }

        let mut restored = SavedRecipeStore::new(&backend);
        restored.reload().expect("再読込失敗");

        assert_eq!(restored.len(), 2);
        assert_eq!(restored.entries()[0].recipe.title, "Pasta");
        assert_eq!(restored.entries()[1].recipe.title, "Sopa");
        assert_eq!(restored.entries()[1].rating, 2);
    }

    #[test]
    fn test_reload_empty_backend() {
        let mut store = SavedRecipeStore::new(MemoryBackend::new());
        store.reload().expect("再読込失敗");

        assert!(store.is_empty());
    }

    #[test]
    fn test_reload_corrupted_record_resets_empty() {
        // 破損レコードは空コレクションにリセット、エラーはログ用に返すだけ
        let mut store = SavedRecipeStore::new(MemoryBackend::with_record("{ invalid json }"));
        let result = store.reload();

        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_reload_tolerates_missing_recipe_fields() {
        let record = r#"[{"recipe": {"title": "Mínima"}, "rating": 1}]"#;
        let mut store = SavedRecipeStore::new(MemoryBackend::with_record(record));
        store.reload().expect("再読込失敗");

        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].recipe.title, "Mínima");
        assert!(store.entries()[0].recipe.steps.is_empty());
    }
}
