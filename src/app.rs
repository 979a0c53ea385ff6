use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::sidebar::Sidebar;
use crate::config::AppConfig;
use crate::pages::analysis::AnalysisPage;
use crate::pages::health::HealthPage;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::from_document());

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=AnalysisPage />
                        <Route path=path!("/status") view=HealthPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
