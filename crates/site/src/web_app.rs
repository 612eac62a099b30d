use file_manager_app::{browser_host, FileManagerApp, FileManagerProvider};
use leptos::*;
use leptos_meta::*;

const STYLESHEET: &str = include_str!("../assets/file_manager.css");

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="File Manager" />
        <Meta name="description" content="Upload, search, preview, and organize files in the browser." />
        <Style>{STYLESHEET}</Style>

        <main class="site-root">
            <FileManagerEntry />
        </main>
    }
}

#[component]
pub fn FileManagerEntry() -> impl IntoView {
    view! {
        <FileManagerProvider host=browser_host()>
            <FileManagerApp />
        </FileManagerProvider>
    }
}
