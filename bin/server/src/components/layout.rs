//! Page chrome shared by every page.

use leptos::prelude::*;
use nodebird_core::AppRoute;

/// Wraps page content with the site header.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-left">
                <a href={AppRoute::Home.path()} class="logo">"nodebird"</a>
            </div>
            <nav class="header-right">
                <a href={AppRoute::Login.path()}>"로그인"</a>
                <a href={AppRoute::Signup.path()}>"회원가입"</a>
            </nav>
        </header>
        <main class="container">{children()}</main>
    }
}
