//! Fridge Chef Common Library
//!
//! Web(WASM)とホスト側テストで共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod intake;
pub mod parser;
pub mod prompts;
pub mod store;

pub use types::{AnalysisResult, DetectedIngredient, NutriEstimate, Recipe, SavedRecipe};
pub use error::{Error, Result};
pub use intake::{ImageIntake, UploadedImage};
pub use parser::{extract_json, parse_analysis_response};
pub use prompts::{build_preferences_part, GEMINI_MODEL, SYSTEM_INSTRUCTION};
pub use store::{MemoryBackend, SavedRecipeStore, StorageBackend, MAX_RATING, STORAGE_KEY};
