//! 料理のコツモーダル（静的コンテンツ）

use leptos::prelude::*;

const TIPS: &[(&str, &str)] = &[
    (
        "Afila tus cuchillos",
        "Un cuchillo afilado es más seguro y eficiente. Usa una chaira regularmente y afila la hoja profesionalmente una vez al año.",
    ),
    (
        "Sazona en cada paso",
        "Añadir sal y pimienta en diferentes etapas de la cocción (al saltear las verduras, al añadir la carne, etc.) crea capas de sabor más complejas.",
    ),
    (
        "No satures la sartén",
        "Cocinar demasiados ingredientes a la vez baja la temperatura y hace que se cuezan en su vapor en lugar de dorarse. Cocina en tandas si es necesario.",
    ),
    (
        "Usa acidez para equilibrar",
        "Un chorrito de limón o vinagre al final de la cocción puede realzar y equilibrar los sabores, especialmente en platos ricos o grasos.",
    ),
    (
        "Conserva hierbas frescas",
        "Envuelve el tallo de hierbas como el perejil o el cilantro en papel de cocina húmedo y guárdalas en una bolsa en la nevera para que duren más.",
    ),
];

#[component]
pub fn TipsModal<F>(open: ReadSignal<bool>, on_close: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || open.get()>
            <div
                class="modal-backdrop"
                on:click={
                    let on_close = on_close.clone();
                    move |_| on_close(())
                }
            >
                // モーダル内のクリックは閉じない
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <button
                        class="modal-close"
                        aria-label="Cerrar modal"
                        on:click={
                            let on_close = on_close.clone();
                            move |_| on_close(())
                        }
                    >
                        "✕"
                    </button>
                    <h2>"Trucos de Cocina"</h2>
                    <div class="tips-list">
                        {TIPS
                            .iter()
                            .map(|(title, content)| view! {
                                <div class="tip">
                                    <h3>{*title}</h3>
                                    <p class="text-muted">{*content}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
