//! APIレスポンスパーサー
//!
//! Geminiのレスポンステキストから単一JSONオブジェクトを抽出し、
//! AnalysisResultとしてパースする

use crate::error::{Error, Result};
use crate::types::AnalysisResult;

/// APIレスポンスからJSON部分を抽出
///
/// 契約上レスポンスは単一のJSONオブジェクトだが、モデルが
/// コードフェンスで囲んで返すことがあるため許容する。
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト
/// 3. エラー
///
/// # Arguments
/// * `response` - APIレスポンス文字列
///
/// # Returns
/// * `Ok(&str)` - 抽出されたJSON文字列
/// * `Err` - JSONが見つからない場合（謝罪文などのプレーンテキスト）
///
/// # Examples
/// ```
/// use fridge_chef_common::extract_json;
///
/// let response = "{\"summary\": \"hola\"}";
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("summary"));
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の {...} を探す
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("JSONが見つかりません".into()))
}

/// 解析レスポンスをパース
///
/// 配列フィールドの欠落は空として扱われる（types側のデフォルト）。
/// パース失敗はSchemaErrorとしてUIの専用メッセージに対応し、
/// 生テキストはコンソールログにのみ出す。
///
/// # Arguments
/// * `response` - GeminiのAPIレスポンス
///
/// # Returns
/// * `Ok(AnalysisResult)` - パース成功
/// * `Err` - JSONが見つからないかパース失敗
pub fn parse_analysis_response(response: &str) -> Result<AnalysisResult> {
    let json_str = extract_json(response)?;
    let result: AnalysisResult = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("解析結果のJSONパースエラー: {}", e)))?;
    Ok(result)
}
