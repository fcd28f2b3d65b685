use crate::domain::document_qa::ui::ChatUploadView;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div style="height: 100vh; display: flex; flex-direction: column; background: var(--colorNeutralBackground3);">
            <ChatUploadView />
        </div>
    }
}
