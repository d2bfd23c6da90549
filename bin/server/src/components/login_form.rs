//! Login form component.
//!
//! The form keeps two controlled text fields in sync with component-local
//! signals. Submission is not wired to any action: the form's default
//! submit is suppressed so the entered values never leave the page.

use crate::components::Button;
use leptos::prelude::*;
use nodebird_core::{AppRoute, LoginField};

/// Reactive state owned by one mounted [`LoginForm`].
#[derive(Debug, Clone, Copy)]
pub struct LoginFormState {
    identifier: RwSignal<String>,
    password: RwSignal<String>,
}

impl LoginFormState {
    /// Creates state with both fields empty.
    ///
    /// The signals belong to the current reactive owner and are disposed
    /// with it.
    pub fn new() -> Self {
        Self {
            identifier: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
        }
    }

    /// Signal holding the text of `field`.
    pub fn value(&self, field: LoginField) -> RwSignal<String> {
        match field {
            LoginField::Identifier => self.identifier,
            LoginField::Password => self.password,
        }
    }

    /// Builds the change handler for `field`.
    ///
    /// The handler stores its argument verbatim. Call once per component
    /// instance and reuse the returned callback.
    pub fn on_change(&self, field: LoginField) -> Callback<String> {
        let value = self.value(field);
        Callback::new(move |new_value: String| value.set(new_value))
    }
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// What one input reads from and writes to.
#[derive(Debug, Clone, Copy)]
struct FieldBinding {
    field: LoginField,
    value: RwSignal<String>,
    on_change: Callback<String>,
}

/// Binds every field to its own signal and handler, in rendering order.
fn bind_fields(state: LoginFormState) -> [FieldBinding; 2] {
    LoginField::ALL.map(|field| FieldBinding {
        field,
        value: state.value(field),
        on_change: state.on_change(field),
    })
}

/// Login form with identifier and password fields and a link to sign up.
///
/// Pass `state` to observe the field values from outside; otherwise the
/// form creates its own.
#[component]
pub fn LoginForm(#[prop(optional)] state: Option<LoginFormState>) -> impl IntoView {
    let [identifier, password] = bind_fields(state.unwrap_or_default());

    view! {
        <form class="login-form" on:submit=|ev| ev.prevent_default()>
            <LoginInput binding=identifier/>
            <LoginInput binding=password/>
            <div class="form-actions">
                <Button button_type="submit" loading=false>"로그인"</Button>
                <a href={AppRoute::Signup.path()} class="link-button">"회원가입"</a>
            </div>
        </form>
    }
}

/// A labeled text input bound to one field.
#[component]
fn LoginInput(binding: FieldBinding) -> impl IntoView {
    let FieldBinding {
        field,
        value,
        on_change,
    } = binding;
    let id = field.input_id();

    view! {
        <div class="form-field">
            <label for=id>{field.label()}</label>
            <br/>
            <input
                id=id
                name=id
                type="text"
                required
                value=move || value.get()
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}
