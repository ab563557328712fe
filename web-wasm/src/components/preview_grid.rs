//! アップロード済み画像のプレビューグリッド

use leptos::prelude::*;

use fridge_chef_common::UploadedImage;

#[component]
pub fn PreviewGrid<F>(images: Signal<Vec<UploadedImage>>, on_remove: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || !images.get().is_empty()>
            <div class="preview-grid">
                {
                    let on_remove = on_remove.clone();
                    move || {
                        let on_remove = on_remove.clone();
                        images
                            .get()
                            .into_iter()
                            .map(|img| {
                                let on_remove = on_remove.clone();
                                let file_name = img.file_name.clone();
                                view! {
                                    <div class="preview-item">
                                        <img src=img.data_url.clone() alt=img.file_name.clone() />
                                        <button
                                            class="preview-remove"
                                            aria-label="Quitar imagen"
                                            on:click=move |_| on_remove(file_name.clone())
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }
                }
            </div>
        </Show>
    }
}
