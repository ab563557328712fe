//! 解析結果表示コンポーネント
//!
//! サマリー・レシピグリッド・検出食材・注意/前提を表示する。
//! 空のセクションはプレースホルダを出さず丸ごと省略する。

use leptos::prelude::*;

use fridge_chef_common::{AnalysisResult, Recipe, SavedRecipe};

use crate::components::recipe_card::RecipeCard;

#[component]
pub fn ResultView<FS, FU, FR>(
    result: AnalysisResult,
    saved: Signal<Vec<SavedRecipe>>,
    on_save: FS,
    on_unsave: FU,
    on_reset: FR,
) -> impl IntoView
where
    FS: Fn(Recipe) + 'static + Clone + Send + Sync,
    FU: Fn(String) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="results">
            <div class="card summary-card">
                <h2>"Resumen de AIChef"</h2>
                <p class="summary-text">{result.summary.clone()}</p>
            </div>

            <h2 class="section-title">"Recetas Sugeridas"</h2>
            <div class="recipe-grid">
                {result
                    .recipes
                    .iter()
                    .map(|recipe| {
                        let title = recipe.title.clone();
                        let is_saved = Signal::derive(move || {
                            saved.get().iter().any(|e| e.recipe.title == title)
                        });
                        view! {
                            <RecipeCard
                                recipe=recipe.clone()
                                is_saved=is_saved
                                on_save=on_save.clone()
                                on_unsave=on_unsave.clone()
                            />
                        }
                    })
                    .collect_view()}
            </div>

            {(!result.detected_ingredients.is_empty())
                .then(|| view! {
                    <div class="card ingredients-card">
                        <h3>"Ingredientes Detectados"</h3>
                        <ul class="ingredient-list">
                            {result
                                .detected_ingredients
                                .iter()
                                .map(|ing| view! {
                                    <li>
                                        {ing.name.clone()}
                                        <span class="confidence">
                                            {format!(" ({}%)", (ing.confidence * 100.0).round() as u32)}
                                        </span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                })}

            {(!result.warnings.is_empty() || !result.assumptions.is_empty())
                .then(|| view! {
                    <div class="notes-grid">
                        {(!result.warnings.is_empty())
                            .then(|| view! {
                                <div class="note note-warning">
                                    <h4>"Advertencias"</h4>
                                    <ul>
                                        {result
                                            .warnings
                                            .iter()
                                            .map(|w| view! { <li>{w.clone()}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            })}
                        {(!result.assumptions.is_empty())
                            .then(|| view! {
                                <div class="note note-assumption">
                                    <h4>"Asunciones"</h4>
                                    <ul>
                                        {result
                                            .assumptions
                                            .iter()
                                            .map(|a| view! { <li>{a.clone()}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            })}
                    </div>
                })}

            <div class="results-footer">
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    "Empezar de Nuevo"
                </button>
            </div>
        </div>
    }
}
