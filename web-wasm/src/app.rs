//! メインアプリケーションコンポーネント
//!
//! 画面状態と全ハンドラを保持する。解析はビジーフラグで
//! 同時1件に制限し、リセットは保存レシピに触らない。

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use fridge_chef_common::{
    parse_analysis_response, AnalysisResult, ImageIntake, Recipe, UploadedImage,
};

use crate::api::gemini;
use crate::components::{
    header::Header, loader::Loader, preview_grid::PreviewGrid, result_view::ResultView,
    saved_recipes::SavedRecipesView, tips_modal::TipsModal, upload_area::UploadArea,
};
use crate::storage;

/// ユーザー向けエラーメッセージ（1行、次の成功かリセットで消える）
const MSG_NO_IMAGES: &str = "Por favor, sube al menos una foto de tu nevera.";
const MSG_TRANSPORT: &str =
    "Ocurrió un error al contactar al Chef AI. Revisa tu conexión e inténtalo de nuevo.";
const MSG_SCHEMA: &str =
    "Hubo un error al procesar la respuesta del chef. Por favor, intenta de nuevo.";

/// 表示ビュー
#[derive(Clone, Copy, PartialEq)]
pub enum View {
    Generator,
    Saved,
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (intake, set_intake) = signal(ImageIntake::new());
    let (preferences, set_preferences) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (result, set_result) = signal(None::<AnalysisResult>);
    let (view, set_view) = signal(View::Generator);
    let (tips_open, set_tips_open) = signal(false);
    let store = RwSignal::new(storage::load_store());

    let images = Signal::derive(move || intake.with(|i| i.images().to_vec()));
    let saved_entries = Signal::derive(move || store.with(|s| s.entries().to_vec()));

    // 画像追加・削除ハンドラ
    let on_images_added = move |new_images: Vec<UploadedImage>| {
        set_intake.update(|i| i.add(new_images));
    };
    let on_remove_image = move |file_name: String| {
        set_intake.update(|i| i.remove(&file_name));
    };

    // リセット（保存レシピストアはそのまま）
    let on_reset = move |_: ()| {
        set_intake.update(|i| i.clear());
        set_preferences.set(String::new());
        set_result.set(None);
        set_error.set(None);
        set_view.set(View::Generator);
    };

    // 解析開始
    let on_submit = move |_| {
        // ビジーフラグで同時送信を抑止
        if loading.get_untracked() {
            return;
        }
        let selected = intake.with_untracked(|i| i.images().to_vec());
        if selected.is_empty() {
            set_error.set(Some(MSG_NO_IMAGES.to_string()));
            return;
        }
        let prefs = preferences.get_untracked();

        set_loading.set(true);
        set_error.set(None);
        set_result.set(None);

        spawn_local(async move {
            match gemini::analyze_fridge(&selected, &prefs).await {
                Ok(raw) => match parse_analysis_response(&raw) {
                    Ok(data) => set_result.set(Some(data)),
                    Err(e) => {
                        // 生テキストは画面に出さずログのみ
                        gloo::console::error!(format!(
                            "レスポンスのパース失敗: {} / raw: {}",
                            e, raw
                        ));
                        set_error.set(Some(MSG_SCHEMA.to_string()));
                    }
                },
                Err(e) => {
                    gloo::console::error!(format!("Gemini API呼び出し失敗: {:?}", e));
                    set_error.set(Some(MSG_TRANSPORT.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    // 保存・解除・評価
    let on_save = move |recipe: Recipe| {
        store.update(|s| {
            if let Err(e) = s.save(recipe) {
                gloo::console::error!(format!("レシピ保存失敗: {}", e));
            }
        });
    };
    let on_unsave = move |title: String| {
        store.update(|s| {
            if let Err(e) = s.unsave(&title) {
                gloo::console::error!(format!("レシピ削除失敗: {}", e));
            }
        });
    };
    let on_rate = move |title: String, rating: u8| {
        store.update(|s| {
            if let Err(e) = s.rate(&title, rating) {
                gloo::console::error!(format!("評価の保存失敗: {}", e));
            }
        });
    };

    view! {
        <div class="app">
            <Header
                on_show_saved=move |_| set_view.set(View::Saved)
                on_show_tips=move |_| set_tips_open.set(true)
                on_reset=on_reset
            />

            <main class="container">
                <Show when=move || view.get() == View::Generator>
                    <Show when=move || result.get().is_none()>
                        <div class="card generator">
                            <div class="generator-intro">
                                <h2>"Hola, soy AIChef"</h2>
                                <p class="text-muted">
                                    "Sube fotos de tu nevera y despensa, y te daré recetas al instante."
                                </p>
                            </div>

                            <UploadArea on_images_added=on_images_added />
                            <PreviewGrid images=images on_remove=on_remove_image />

                            <div class="form-group">
                                <label for="preferences">
                                    "Preferencias y Restricciones (opcional)"
                                </label>
                                <textarea
                                    id="preferences"
                                    rows="4"
                                    placeholder="Ej: vegetariano, sin gluten, 2 raciones, tengo airfryer..."
                                    prop:value=move || preferences.get()
                                    on:input=move |ev| {
                                        set_preferences.set(event_target_value(&ev));
                                    }
                                ></textarea>
                            </div>

                            <Show when=move || error.get().is_some()>
                                <p class="error-message">{move || error.get().unwrap_or_default()}</p>
                            </Show>

                            <button
                                class="btn btn-primary btn-submit"
                                disabled=move || loading.get() || intake.with(|i| i.is_empty())
                                on:click=on_submit
                            >
                                <Show
                                    when=move || loading.get()
                                    fallback=|| view! { "Analizar con AIChef" }
                                >
                                    <Loader />
                                </Show>
                            </button>
                        </div>
                    </Show>

                    <Show when=move || loading.get() && result.get().is_none()>
                        <p class="thinking">"AIChef está pensando... 🧑‍🍳"</p>
                    </Show>

                    {move || {
                        result.get().map(|data| view! {
                            <ResultView
                                result=data
                                saved=saved_entries
                                on_save=on_save
                                on_unsave=on_unsave
                                on_reset=on_reset
                            />
                        })
                    }}
                </Show>

                <Show when=move || view.get() == View::Saved>
                    <SavedRecipesView
                        entries=saved_entries
                        on_unsave=on_unsave
                        on_rate=on_rate
                    />
                </Show>
            </main>

            <TipsModal open=tips_open on_close=move |_| set_tips_open.set(false) />
        </div>
    }
}
