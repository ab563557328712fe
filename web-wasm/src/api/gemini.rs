//! Gemini API連携
//!
//! 画像セグメント（アップロード順）+ 任意の設定テキストを
//! 固定システムインストラクション付きで送信し、レスポンスの生テキストを返す。
//! JSONパースは呼び出し側（common::parser）の責務。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use serde::{Deserialize, Serialize};
use fridge_chef_common::{build_preferences_part, UploadedImage, GEMINI_MODEL, SYSTEM_INSTRUCTION};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// ビルド時に埋め込むAPIキー
const API_KEY: Option<&str> = option_env!("GEMINI_API_KEY");

/// Gemini APIリクエスト
#[derive(Serialize)]
struct GeminiRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

/// Gemini APIレスポンス
#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,..." 形式のData URL
///
/// # Returns
/// MIMEタイプ（例: "image/jpeg"）、抽出失敗時は"image/jpeg"を返す
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

/// リクエスト組み立て（純粋関数、ホスト側テスト対象）
///
/// セグメント順: 画像（アップロード順）→ 任意の設定テキスト1件
fn build_request(images: &[UploadedImage], preferences: &str) -> GeminiRequest {
    let mut parts: Vec<Part> = Vec::new();

    for image in images {
        let Some(data) = extract_base64_from_data_url(&image.data_url) else {
            continue;
        };
        let mime_type = if image.mime_type.is_empty() {
            extract_mime_type_from_data_url(&image.data_url).to_string()
        } else {
            image.mime_type.clone()
        };
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type,
                data: data.to_string(),
            },
        });
    }

    if let Some(text) = build_preferences_part(preferences) {
        parts.push(Part::Text { text });
    }

    GeminiRequest {
        system_instruction: Content {
            parts: vec![Part::Text {
                text: SYSTEM_INSTRUCTION.to_string(),
            }],
        },
        contents: vec![Content { parts }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
        },
    }
}

/// 冷蔵庫写真を解析
///
/// 1回のユーザー操作につき1回だけ呼ぶ（リトライなし、タイムアウトなし）。
/// ネットワーク・プロバイダエラーはJsValueのまま呼び出し側へ伝播する。
///
/// # Arguments
/// * `images` - アップロード済み画像（順序維持）
/// * `preferences` - 自由入力の希望・制約テキスト（空可）
///
/// # Returns
/// レスポンスの生テキスト（未パース）
pub async fn analyze_fridge(
    images: &[UploadedImage],
    preferences: &str,
) -> Result<String, JsValue> {
    let api_key =
        API_KEY.ok_or_else(|| JsValue::from_str("GEMINI_API_KEY no configurada"))?;

    let request = build_request(images, preferences);
    call_gemini_api(api_key, &request).await
}

/// Gemini API呼び出し（fetch）
async fn call_gemini_api(api_key: &str, request: &GeminiRequest) -> Result<String, JsValue> {
    let url = format!(
        "{}/{}:generateContent?key={}",
        GEMINI_API_BASE, GEMINI_MODEL, api_key
    );
    let body = serde_json::to_string(request)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)?;

    response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or_else(|| JsValue::from_str("Empty response"))
}
