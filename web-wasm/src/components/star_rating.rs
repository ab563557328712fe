//! 星評価コンポーネント（1-5、ホバーでプレビュー）

use leptos::prelude::*;

#[component]
pub fn StarRating<F>(rating: Signal<u8>, on_rating: F) -> impl IntoView
where
    F: Fn(u8) + 'static + Clone + Send + Sync,
{
    let (hover, set_hover) = signal(0u8);

    // ホバー中はホバー値、それ以外は確定値
    let active = move || {
        let h = hover.get();
        if h > 0 {
            h
        } else {
            rating.get()
        }
    };

    view! {
        <div class="star-rating">
            {(1..=5u8)
                .map(|value| {
                    let on_rating = on_rating.clone();
                    view! {
                        <button
                            type="button"
                            class=move || if value <= active() { "star filled" } else { "star" }
                            on:click=move |_| on_rating(value)
                            on:mouseenter=move |_| set_hover.set(value)
                            on:mouseleave=move |_| set_hover.set(0)
                        >
                            {move || if value <= active() { "★" } else { "☆" }}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
