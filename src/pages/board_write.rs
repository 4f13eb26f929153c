//! New board post form with an optional image.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_client;
use crate::components::top_bar::TopBar;
use crate::net::api;
use crate::net::types::ImageUpload;
use crate::state::auth::AuthState;
use crate::util::auth::note_api_error;
use crate::util::validation::{ImageMeta, POST_CONTENT_MAX_CHARS, POST_TITLE_MAX_CHARS, validate_post};

fn image_meta(image: &ImageUpload) -> ImageMeta {
    ImageMeta { mime: image.mime.clone(), size: image.bytes.len() as u64 }
}

#[component]
pub fn BoardWritePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = use_client();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let image = RwSignal::new(None::<ImageUpload>);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_file = move |ev: leptos::ev::Event| {
        info.set(String::new());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match read_picked_image(&ev).await {
                Ok(picked) => image.set(picked),
                Err(message) => {
                    image.set(None);
                    info.set(message);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        drop(ev);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (title_value, content_value, upload) = (title.get(), content.get(), image.get());
        if let Err(e) = validate_post(&title_value, &content_value, upload.as_ref().map(image_meta).as_ref()) {
            info.set(e.to_string());
            return;
        }
        busy.set(true);
        info.set("Posting...".to_owned());

        let client = client.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::create_post(&client, &title_value, &content_value, upload.as_ref()).await {
                Ok(()) => navigate("/board", NavigateOptions { replace: true, ..NavigateOptions::default() }),
                Err(e) => {
                    note_api_error(auth, &e);
                    info.set(e.user_message());
                }
            }
            busy.set(false);
        });
    };

    let counter = |signal: RwSignal<String>, max: usize| move || format!("{}/{max}", signal.with(|s| s.chars().count()));

    view! {
        <TopBar/>
        <section class="write-page">
            <h2>"New post"</h2>
            <form class="write-form" on:submit=on_submit>
                <input
                    class="write-input"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <span class="write-counter">{counter(title, POST_TITLE_MAX_CHARS)}</span>
                <textarea
                    class="write-textarea"
                    placeholder="Share a recipe or a tip"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <span class="write-counter">{counter(content, POST_CONTENT_MAX_CHARS)}</span>
                <input class="write-file" type="file" accept="image/*" on:change=on_file/>
                <Show when=move || image.with(Option::is_some)>
                    <p class="write-file__name">
                        {move || image.with(|i| i.as_ref().map(|i| i.file_name.clone()).unwrap_or_default())}
                        <button type="button" class="write-file__clear" on:click=move |_| image.set(None)>
                            "Remove"
                        </button>
                    </p>
                </Show>
                <button class="write-button" type="submit" disabled=move || busy.get()>"Post"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="form-message">{move || info.get()}</p>
            </Show>
        </section>
    }
}

/// Read the file chosen in a `<input type=file>` change event.
///
/// Type and size are checked before the bytes are read so an oversized file
/// is rejected without loading it.
#[cfg(feature = "csr")]
async fn read_picked_image(ev: &leptos::ev::Event) -> Result<Option<ImageUpload>, String> {
    use wasm_bindgen::JsCast;

    use crate::util::validation::validate_image;

    let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
        return Ok(None);
    };
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let meta = ImageMeta { mime: file.type_(), size: file.size() as u64 };
    validate_image(&meta).map_err(|e| e.to_string())?;

    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Could not read the selected file.".to_owned())?;
    Ok(Some(ImageUpload { file_name: file.name(), mime: meta.mime, bytes: js_sys::Uint8Array::new(&buffer).to_vec() }))
}
