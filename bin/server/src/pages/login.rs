//! Login page component.

use crate::components::{AppLayout, LoginForm};
use leptos::prelude::*;
use leptos_meta::Title;

/// Login page hosting the login form.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="로그인 | nodebird"/>
        <AppLayout>
            <div class="login-page">
                <div class="login-box">
                    <h1>"로그인"</h1>
                    <LoginForm/>
                </div>
            </div>
        </AppLayout>
    }
}
