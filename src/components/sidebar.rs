use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"Competitor Lens"</h1>
                <p class="sidebar-subtitle">"Website Competitor Analysis"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Analysis"</a>
                </li>
                <li class="nav-item">
                    <a href="/status" class="nav-link">"Service Status"</a>
                </li>
            </ul>
        </nav>
    }
}
