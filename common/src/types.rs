//! 解析結果の型定義
//!
//! Geminiレスポンスとローカル保存で共有される型:
//! - DetectedIngredient: 画像から検出された食材
//! - Recipe: レシピ提案（手順・所要時間・栄養推定）
//! - AnalysisResult: 1回の解析の最終出力
//! - SavedRecipe: ローカル保存されたレシピ（星評価付き）

use serde::{Deserialize, Serialize};

/// 検出された食材
///
/// フィールド名はGeminiレスポンスのJSONキーと一致させる（snake_case）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectedIngredient {
    pub name: String,

    /// 商品ブランド（ラベルが読めた場合のみ）
    pub brand: Option<String>,

    /// 量の目安（例: "2-3 unidades"）
    pub quantity_estimate: String,

    /// 状態（例: "maduro", "abierto"）
    pub state: String,

    /// 確信度 [0-1]
    pub confidence: f32,

    /// 検出元画像のインデックス（アップロード順）
    pub source_image_index: u32,
}

/// 1人前あたりの栄養推定
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NutriEstimate {
    pub kcal_per_ration: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

/// レシピ提案
///
/// titleが結果内の一意キー（保存・評価もtitleで照合する）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub title: String,
    pub rations: u32,
    pub total_time_min: u32,
    pub uses: Vec<String>,
    pub steps: Vec<String>,
    pub tips: Vec<String>,
    pub substitutions: Vec<String>,
    pub missing_minimal: Vec<String>,
    pub nutri_estimate: NutriEstimate,
}

/// ローカル保存されたレシピ（星評価0-5付き、0=未評価）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedRecipe {
    pub recipe: Recipe,
    pub rating: u8,
}

/// Gemini解析結果
///
/// 配列フィールドの欠落は空として扱う（パース失敗にしない）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub detected_ingredients: Vec<DetectedIngredient>,
    pub assumptions: Vec<String>,
    pub recipes: Vec<Recipe>,
    pub warnings: Vec<String>,
    pub next_actions: Vec<String>,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_result_default() {
        let result = AnalysisResult::default();
        assert!(result.detected_ingredients.is_empty());
        assert!(result.recipes.is_empty());
        assert_eq!(result.summary, "");
    }

    #[test]
    fn test_analysis_result_deserialize() {
        let json = r#"{
            "detected_ingredients": [
                {
                    "name": "tomate",
                    "quantity_estimate": "2-3 unidades",
                    "state": "maduro",
                    "confidence": 0.86,
                    "source_image_index": 0
                }
            ],
            "recipes": [
                {
                    "title": "Pasta de tomate",
                    "rations": 2,
                    "total_time_min": 20,
                    "uses": ["pasta", "tomate"],
                    "steps": ["Cuece la pasta.", "Saltea el tomate."],
                    "nutri_estimate": {"kcal_per_ration": 550, "protein_g": 25, "carbs_g": 65, "fat_g": 18}
                }
            ],
            "summary": "Hay tomates maduros para una pasta rápida."
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.detected_ingredients.len(), 1);
        assert_eq!(result.detected_ingredients[0].name, "tomate");
        assert_eq!(result.detected_ingredients[0].brand, None);
        assert_eq!(result.recipes.len(), 1);
        assert_eq!(result.recipes[0].title, "Pasta de tomate");
        assert_eq!(result.recipes[0].nutri_estimate.kcal_per_ration, 550);
        assert!(result.summary.contains("tomates"));
    }

    #[test]
    fn test_analysis_result_missing_arrays() {
        // 配列フィールドが欠けていても空として読めることを確認
        let json = r#"{"summary": "Solo un resumen."}"#;

        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(result.detected_ingredients.is_empty());
        assert!(result.assumptions.is_empty());
        assert!(result.recipes.is_empty());
        assert!(result.warnings.is_empty());
        assert!(result.next_actions.is_empty());
        assert_eq!(result.summary, "Solo un resumen.");
    }

    #[test]
    fn test_recipe_deserialize_missing_fields() {
        let json = r#"{"title": "Tortilla", "rations": 1}"#;

        let recipe: Recipe = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(recipe.title, "Tortilla");
        assert_eq!(recipe.rations, 1);
        assert_eq!(recipe.total_time_min, 0); // デフォルト値
        assert!(recipe.steps.is_empty()); // デフォルト値
    }

    #[test]
    fn test_saved_recipe_roundtrip() {
        let original = SavedRecipe {
            recipe: Recipe {
                title: "Ensalada de garbanzos".to_string(),
                rations: 2,
                total_time_min: 15,
                uses: vec!["garbanzos".to_string(), "tomate".to_string()],
                steps: vec!["Escurre los garbanzos.".to_string(), "Mezcla todo.".to_string()],
                ..Default::default()
            },
            rating: 4,
        };

        let json = serde_json::to_string(&original).expect("シリアライズ失敗");
        let restored: SavedRecipe = serde_json::from_str(&json).expect("デシリアライズ失敗");

        assert_eq!(original.recipe.title, restored.recipe.title);
        assert_eq!(original.recipe.steps, restored.recipe.steps);
        assert_eq!(original.rating, restored.rating);
    }

    #[test]
    fn test_detected_ingredient_with_brand() {
        let json = r#"{
            "name": "atún en lata",
            "brand": "Calvo",
            "quantity_estimate": "1 lata",
            "state": "cerrado",
            "confidence": 0.92,
            "source_image_index": 1
        }"#;

        let ing: DetectedIngredient = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(ing.brand.as_deref(), Some("Calvo"));
        assert_eq!(ing.source_image_index, 1);
    }
}
