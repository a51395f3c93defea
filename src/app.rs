use leptos::prelude::*;
use crate::core::config::BoardConfig;
use crate::pages::BoardPage;

#[component]
pub fn App() -> impl IntoView {
    provide_context(BoardConfig::default());

    view! {
        <main class="app">
            <BoardPage />
        </main>
    }
}
