//! 画像インテーク
//!
//! アップロードされた画像の順序付きリストを管理する。
//! Data URLがプレビューとリクエストペイロードを兼ねるため、
//! エントリの破棄がそのままリソース解放になる。

use serde::{Deserialize, Serialize};

/// アップロードされた画像1枚
///
/// 永続化はされない（セッション内のみ）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedImage {
    pub file_name: String,
    pub mime_type: String,
    /// "data:image/jpeg;base64,..." 形式
    pub data_url: String,
}

/// 画像インテーク（追加順を保持、内容による重複排除はしない）
#[derive(Debug, Clone, Default)]
pub struct ImageIntake {
    images: Vec<UploadedImage>,
}

impl ImageIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// 選択された画像を末尾に追加（選択順のまま）
    pub fn add(&mut self, images: Vec<UploadedImage>) {
        self.images.extend(images);
    }

    /// ファイル名が一致するエントリを全て削除
    ///
    /// 同名ファイルが複数あると全て消える
    pub fn remove(&mut self, file_name: &str) {
        self.images.retain(|img| img.file_name != file_name);
    }

    /// 全エントリ破棄（リセット時）
    pub fn clear(&mut self) {
        self.images.clear();
    }

    pub fn images(&self) -> &[UploadedImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> UploadedImage {
        UploadedImage {
            file_name: name.to_string(),
            mime_type: "image/jpeg".to_string(),
            data_url: format!("data:image/jpeg;base64,{}", name),
        }
    }

    #[test]
    fn test_add_preserves_order() {
        let mut intake = ImageIntake::new();
        intake.add(vec![image("a.jpg"), image("b.jpg")]);
        intake.add(vec![image("c.jpg")]);

        let names: Vec<&str> = intake.images().iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut intake = ImageIntake::new();
        intake.add(vec![image("a.jpg"), image("b.jpg"), image("c.jpg")]);
        intake.remove("b.jpg");

        let names: Vec<&str> = intake.images().iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "c.jpg"]);
    }

    #[test]
    fn test_remove_nonexistent_is_noop() {
        let mut intake = ImageIntake::new();
        intake.add(vec![image("a.jpg")]);
        intake.remove("zz.jpg");

        assert_eq!(intake.len(), 1);
    }

    #[test]
    fn test_remove_duplicate_names_removes_all() {
        // 同名ファイルは全て削除される
        let mut intake = ImageIntake::new();
        intake.add(vec![image("dup.jpg"), image("otra.jpg"), image("dup.jpg")]);
        intake.remove("dup.jpg");

        let names: Vec<&str> = intake.images().iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, vec!["otra.jpg"]);
    }

    #[test]
    fn test_no_dedup_on_add() {
        let mut intake = ImageIntake::new();
        intake.add(vec![image("x.jpg")]);
        intake.add(vec![image("x.jpg")]);

        assert_eq!(intake.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut intake = ImageIntake::new();
        intake.add(vec![image("a.jpg"), image("b.jpg")]);
        intake.clear();

        assert!(intake.is_empty());
    }
}
