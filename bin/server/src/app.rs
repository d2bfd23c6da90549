//! Main Leptos application component and routing.

use crate::pages::{HomePage, LoginPage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="nodebird"/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/login") view=LoginPage/>
            </Routes>
        </Router>
    }
}
