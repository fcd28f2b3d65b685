//! PDF Q&A - View Component

use super::model::{ask_question, upload_pdf};
use super::state::{UploadStatus, NO_ANSWER_FALLBACK, TRY_AGAIN_LATER};
use super::view_model::DocumentQaVm;
use crate::shared::icons::icon;
use crate::shared::notify;
use contracts::domain::document_qa::dto::MessageSender;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatUploadView() -> impl IntoView {
    let vm = DocumentQaVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = {
        let messages_container_ref = messages_container_ref.clone();
        move || {
            if let Some(container) = messages_container_ref.get() {
                request_animation_frame(move || {
                    container.set_scroll_top(container.scroll_height());
                });
            }
        }
    };

    // Ask is blocked while an upload is settling the filename, and while
    // a previous exchange is still awaiting its reply.
    let ask_disabled = Signal::derive(move || {
        vm.is_asking.get() || vm.state.with(|s| s.status == UploadStatus::Uploading)
    });

    // Ask handler - using Callback to avoid move issues
    let handle_ask = Callback::new({
        let scroll_to_bottom = scroll_to_bottom.clone();
        move |_| {
            if ask_disabled.get() {
                return;
            }

            // Appends the user message and clears the draft before the
            // request goes out; whitespace-only drafts are silently ignored
            let Some(request) = vm.accept_question() else {
                return;
            };

            vm.is_asking.set(true);
            scroll_to_bottom();

            let scroll_to_bottom = scroll_to_bottom.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let reply = match ask_question(&request).await {
                    Ok(resp) => resp
                        .answer_text()
                        .unwrap_or_else(|| NO_ANSWER_FALLBACK.to_string()),
                    Err(e) => {
                        log::error!("ask_question failed: {}", e);
                        TRY_AGAIN_LATER.to_string()
                    }
                };
                // Exactly one bot message per accepted question
                vm.state.update(|s| s.record_reply(reply));
                vm.is_asking.set(false);
                scroll_to_bottom();
            });
        }
    });

    view! {
        <div style="height: 100%; display: flex; flex-direction: column; padding: 20px;">
            // Header - upload control lives here
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="margin-bottom: 16px; padding-bottom: 12px; border-bottom: 1px solid var(--colorNeutralStroke2);"
            >
                <h2 style="font-size: 18px; font-weight: bold;">"PDF Q&A"</h2>
                <Flex align=FlexAlign::Center style="gap: 12px;">
                    <span style="color: var(--colorNeutralForeground3); font-size: 14px;">
                        {move || {
                            vm.state
                                .with(|s| s.file_name.clone())
                                .map(|name| view! {
                                    <span>{icon("document")} " " {name}</span>
                                })
                        }}
                    </span>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            if let Some(window) = web_sys::window() {
                                if let Some(document) = window.document() {
                                    if let Some(input) = document.get_element_by_id("file-upload") {
                                        use wasm_bindgen::JsCast;
                                        if let Ok(input) = input.dyn_into::<web_sys::HtmlElement>() {
                                            input.click();
                                        }
                                    }
                                }
                            }
                        }
                    >
                        {icon("upload")}
                        " "
                        {move || vm.state.with(|s| s.status.label())}
                    </Button>
                </Flex>
            </Flex>

            <input
                type="file"
                accept=".pdf"
                style="display: none;"
                id="file-upload"
                on:change=move |ev| {
                    use wasm_bindgen::JsCast;
                    let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
                    if let Some(files) = input.files() {
                        if let Some(file) = files.get(0) {
                            let local_name = file.name();
                            vm.state.update(|s| s.begin_upload(local_name.clone()));
                            vm.upload_error.set(None);
                            wasm_bindgen_futures::spawn_local(async move {
                                match upload_pdf(file).await {
                                    Ok(resp) => {
                                        let resolved = resp.resolve_stored_name(&local_name);
                                        vm.state.update(|s| s.upload_succeeded(resolved.clone()));
                                        notify::alert(&format!(
                                            "File uploaded successfully: {}",
                                            resolved
                                        ));
                                    }
                                    Err(e) => {
                                        log::error!("upload_pdf failed: {}", e);
                                        vm.state.update(|s| s.upload_failed());
                                        vm.upload_error.set(Some(e));
                                        notify::alert("Failed to upload file.");
                                    }
                                }
                            });
                        }
                    }
                    // Clear input so re-selecting the same file fires again
                    input.set_value("");
                }
            />

            // Upload error display
            {move || {
                vm.upload_error
                    .get()
                    .map(|e| {
                        view! {
                            <div style="padding: 12px; margin-bottom: 16px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                                <span style="color: var(--color-error);">{format!("Upload error: {}", e)}</span>
                            </div>
                        }
                    })
            }}

            // Messages area
            <div
                node_ref=messages_container_ref
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; margin-bottom: 16px; padding: 12px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
            >
                <For
                    each=move || {
                        vm.state
                            .get()
                            .messages
                            .into_iter()
                            .enumerate()
                            .collect::<Vec<_>>()
                    }
                    key=|(idx, _)| *idx
                    let:entry
                >
                    {{
                        let (_, msg) = entry;
                        let is_user = msg.sender == MessageSender::User;
                        view! {
                            <div
                                style=if is_user {
                                    "align-self: flex-end; max-width: 70%;"
                                } else {
                                    "align-self: flex-start; max-width: 70%;"
                                }
                            >
                                <div
                                    style=if is_user {
                                        "background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
                                    } else {
                                        "background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
                                    }
                                >
                                    <div style="white-space: pre-wrap;">{msg.text.clone()}</div>
                                </div>
                            </div>
                        }
                    }}
                </For>
            </div>

            // Input area
            <Flex style="gap: 8px;">
                <div style="flex: 1;">
                    <Input
                        value=vm.draft
                        placeholder="Ask a question about the PDF..."
                        attr:style="width: 100%;"
                        disabled=ask_disabled
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                handle_ask.run(());
                            }
                        }
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=ask_disabled
                    on_click=move |_| handle_ask.run(())
                >
                    {icon("send")}
                    " Ask"
                </Button>
            </Flex>
        </div>
    }
}
