//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップまたはクリックで画像を選択し、
//! FileReaderでData URLに読み込んで選択順のままインテークへ渡す

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileList, FileReader, HtmlInputElement};

use fridge_chef_common::UploadedImage;

#[component]
pub fn UploadArea<F>(on_images_added: F) -> impl IntoView
where
    F: Fn(Vec<UploadedImage>) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let handle_files = {
        let on_images_added = on_images_added.clone();
        move |files: FileList| read_files(files, on_images_added.clone())
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    handle_files(files);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_files = handle_files.clone();
        move |_| {
            // ファイル選択ダイアログを開く
            let document = web_sys::window().unwrap().document().unwrap();
            let input: HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");
            input.set_multiple(true);

            let handle_files = handle_files.clone();
            let closure = Closure::wrap(Box::new(move |ev: web_sys::Event| {
                let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                else {
                    return;
                };
                if let Some(files) = input.files() {
                    handle_files(files);
                }
            }) as Box<dyn FnMut(web_sys::Event)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p>"Sube una o varias fotos o arrástralas aquí"</p>
            <p class="text-muted">"PNG, JPG, GIF hasta 10MB"</p>
        </div>
    }
}

/// 選択されたファイル群をData URLへ読み込む
///
/// FileReaderは完了順が選択順と一致しないため、バッチ全体が
/// 読み終わってから選択順のままコールバックへ渡す
fn read_files<F>(files: FileList, on_images_added: F)
where
    F: Fn(Vec<UploadedImage>) + 'static,
{
    let total = files.length() as usize;
    if total == 0 {
        return;
    }

    let batch: Rc<RefCell<Vec<Option<UploadedImage>>>> =
        Rc::new(RefCell::new(vec![None; total]));
    let done = Rc::new(Cell::new(0usize));
    let on_images_added = Rc::new(on_images_added);

    for index in 0..total {
        let Some(file) = files.get(index as u32) else {
            continue;
        };
        read_file(file, index, total, &batch, &done, &on_images_added);
    }
}

fn read_file<F>(
    file: File,
    index: usize,
    total: usize,
    batch: &Rc<RefCell<Vec<Option<UploadedImage>>>>,
    done: &Rc<Cell<usize>>,
    on_images_added: &Rc<F>,
) where
    F: Fn(Vec<UploadedImage>) + 'static,
{
    let file_name = file.name();
    let mime_type = file.type_();
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let batch = Rc::clone(batch);
    let done = Rc::clone(done);
    let on_images_added = Rc::clone(on_images_added);
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                batch.borrow_mut()[index] = Some(UploadedImage {
                    file_name: file_name.clone(),
                    mime_type: mime_type.clone(),
                    data_url,
                });
            }
        }

        done.set(done.get() + 1);
        if done.get() == total {
            // 読めなかったファイルは落として選択順のまま追加
            let images: Vec<UploadedImage> = batch.borrow_mut().drain(..).flatten().collect();
            if !images.is_empty() {
                on_images_added(images);
            }
        }
    }) as Box<dyn FnMut(web_sys::ProgressEvent)>);

    // loadendは成功・失敗の両方で発火する
    reader.set_onloadend(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
