//! 送信ボタン内のスピナー

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! { <span class="loader" aria-label="Cargando"></span> }
}
