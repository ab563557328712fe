//! 保存レシピビュー
//!
//! 保存済みレシピの一覧・削除・星評価

use leptos::prelude::*;

use fridge_chef_common::SavedRecipe;

use crate::components::star_rating::StarRating;

#[component]
pub fn SavedRecipesView<FU, FR>(
    entries: Signal<Vec<SavedRecipe>>,
    on_unsave: FU,
    on_rate: FR,
) -> impl IntoView
where
    FU: Fn(String) + 'static + Clone + Send + Sync,
    FR: Fn(String, u8) + 'static + Clone + Send + Sync,
{
    view! {
        <Show
            when=move || !entries.get().is_empty()
            fallback=|| view! {
                <div class="saved-empty">
                    <h2>"No tienes recetas guardadas"</h2>
                    <p class="text-muted">"¡Guarda tus recetas favoritas para verlas aquí!"</p>
                </div>
            }
        >
            <div class="saved-list">
                <h2 class="section-title">"Mis Recetas Guardadas"</h2>
                <For
                    each=move || entries.get()
                    key=|entry| entry.recipe.title.clone()
                    children={
                        let on_unsave = on_unsave.clone();
                        let on_rate = on_rate.clone();
                        move |entry: SavedRecipe| {
                            let title = entry.recipe.title.clone();
                            let on_unsave = on_unsave.clone();
                            let on_rate = on_rate.clone();

                            // キーはタイトルなので評価の現在値はストアから引き直す
                            let rating = Signal::derive({
                                let title = title.clone();
                                move || {
                                    entries
                                        .get()
                                        .iter()
                                        .find(|e| e.recipe.title == title)
                                        .map(|e| e.rating)
                                        .unwrap_or(0)
                                }
                            });

                            let rate_title = title.clone();
                            view! {
                                <div class="card saved-card">
                                    <div class="saved-card-head">
                                        <h3>{entry.recipe.title.clone()}</h3>
                                        <button
                                            class="icon-button"
                                            aria-label="Eliminar receta"
                                            on:click={
                                                let title = title.clone();
                                                move |_| on_unsave(title.clone())
                                            }
                                        >
                                            "🗑"
                                        </button>
                                    </div>
                                    <p class="text-muted">
                                        {format!(
                                            "{} min • {} raciones",
                                            entry.recipe.total_time_min,
                                            entry.recipe.rations,
                                        )}
                                    </p>
                                    <div class="saved-card-body">
                                        <div>
                                            <h4>"Pasos:"</h4>
                                            <ol>
                                                {entry
                                                    .recipe
                                                    .steps
                                                    .iter()
                                                    .map(|step| view! { <li>{step.clone()}</li> })
                                                    .collect_view()}
                                            </ol>
                                        </div>
                                        <div>
                                            <h4>"Tu Puntuación:"</h4>
                                            <StarRating
                                                rating=rating
                                                on_rating=move |value| on_rate(rate_title.clone(), value)
                                            />
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    }
                />
            </div>
        </Show>
    }
}
