//! ヘッダーコンポーネント
//!
//! タイトル（クリックでリセット）とハンバーガーメニュー。
//! メニュー表示中だけdocumentのmousedownを監視し、外側クリックで閉じる。

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

#[component]
pub fn Header<FS, FT, FR>(
    on_show_saved: FS,
    on_show_tips: FT,
    on_reset: FR,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send + Sync,
    FT: Fn(()) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let (menu_open, set_menu_open) = signal(false);
    let menu_ref = NodeRef::<Div>::new();
    let outside_click = StoredValue::new_local(None::<Closure<dyn FnMut(MouseEvent)>>);

    // 開いている間だけリスナーを付け、閉じたら外す
    Effect::new(move |_| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if menu_open.get() {
            let closure = Closure::wrap(Box::new(move |ev: MouseEvent| {
                let inside = menu_ref
                    .get_untracked()
                    .zip(ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()))
                    .map(|(el, node)| el.contains(Some(&node)))
                    .unwrap_or(false);
                if !inside {
                    set_menu_open.set(false);
                }
            }) as Box<dyn FnMut(MouseEvent)>);

            let _ = document
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            outside_click.set_value(Some(closure));
        } else {
            let mut taken = None;
            outside_click.update_value(|c| taken = c.take());
            if let Some(closure) = taken {
                let _ = document.remove_event_listener_with_callback(
                    "mousedown",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    });

    view! {
        <header class="header">
            <div class="menu" node_ref=menu_ref>
                <button
                    class="menu-button"
                    aria-label="Abrir menú"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <Show when=move || menu_open.get()>
                    <div class="menu-dropdown">
                        <button
                            class="menu-item"
                            on:click={
                                let on_show_saved = on_show_saved.clone();
                                move |_| {
                                    on_show_saved(());
                                    set_menu_open.set(false);
                                }
                            }
                        >
                            "Mis Recetas Guardadas"
                        </button>
                        <button
                            class="menu-item"
                            on:click={
                                let on_show_tips = on_show_tips.clone();
                                move |_| {
                                    on_show_tips(());
                                    set_menu_open.set(false);
                                }
                            }
                        >
                            "Trucos de Cocina"
                        </button>
                    </div>
                </Show>
            </div>
            <h1
                class="app-title"
                on:click={
                    let on_reset = on_reset.clone();
                    move |_| on_reset(())
                }
            >
                "AIChef"
            </h1>
        </header>
    }
}
