//! Home page component.

use crate::components::AppLayout;
use leptos::prelude::*;
use nodebird_core::AppRoute;

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppLayout>
            <div class="home-page">
                <h1>"nodebird"</h1>
                <p>"로그인 후 이용해 주세요."</p>
                <a href={AppRoute::Login.path()} class="cta-button">"로그인"</a>
            </div>
        </AppLayout>
    }
}
