//! レシピカードコンポーネント
//!
//! タイトルをキーに保存・解除をトグルする

use leptos::prelude::*;

use fridge_chef_common::Recipe;

#[component]
pub fn RecipeCard<FS, FU>(
    recipe: Recipe,
    is_saved: Signal<bool>,
    on_save: FS,
    on_unsave: FU,
) -> impl IntoView
where
    FS: Fn(Recipe) + 'static + Clone + Send + Sync,
    FU: Fn(String) + 'static + Clone + Send + Sync,
{
    let on_toggle = {
        let recipe = recipe.clone();
        let title = recipe.title.clone();
        move |_| {
            if is_saved.get_untracked() {
                on_unsave(title.clone());
            } else {
                on_save(recipe.clone());
            }
        }
    };

    view! {
        <div class="recipe-card">
            <div class="recipe-card-head">
                <span class="recipe-meta">
                    {format!("{} min • {} raciones", recipe.total_time_min, recipe.rations)}
                </span>
                <button
                    class=move || if is_saved.get() { "star-toggle saved" } else { "star-toggle" }
                    aria-label=move || {
                        if is_saved.get() { "Quitar de guardados" } else { "Guardar receta" }
                    }
                    on:click=on_toggle
                >
                    {move || if is_saved.get() { "★" } else { "☆" }}
                </button>
            </div>

            <h3 class="recipe-title">{recipe.title.clone()}</h3>

            <div class="recipe-section">
                <h4>"Pasos:"</h4>
                <ol>
                    {recipe.steps.iter().map(|step| view! { <li>{step.clone()}</li> }).collect_view()}
                </ol>
            </div>

            {(!recipe.missing_minimal.is_empty())
                .then(|| view! {
                    <div class="recipe-section">
                        <h4>"Necesitarás:"</h4>
                        <p class="text-muted">{recipe.missing_minimal.join(", ")}</p>
                    </div>
                })}

            <div class="recipe-footer">
                <h4>"Consejos y Sustituciones:"</h4>
                <ul>
                    {recipe.tips.iter().map(|tip| view! { <li>{tip.clone()}</li> }).collect_view()}
                    {recipe
                        .substitutions
                        .iter()
                        .map(|sub| view! { <li>{sub.clone()}</li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
