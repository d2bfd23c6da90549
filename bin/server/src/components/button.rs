//! Primary action button.

use leptos::prelude::*;

/// A primary-styled button with an optional loading indicator.
///
/// While `loading` is true the button shows a spinner, is disabled, and
/// reports itself busy to assistive technology.
#[component]
pub fn Button(
    /// The HTML `type` attribute (`"submit"`, `"button"` or `"reset"`).
    #[prop(default = "button")]
    button_type: &'static str,
    /// Whether to show the loading indicator.
    #[prop(default = false)]
    loading: bool,
    children: Children,
) -> impl IntoView {
    let busy = if loading { "true" } else { "false" };

    view! {
        <button type=button_type class="button button-primary" disabled=loading aria-busy=busy>
            {loading.then(|| view! { <span class="spinner"></span> })}
            {children()}
        </button>
    }
}
