//! Reusable UI components.

pub mod button;
pub mod layout;
pub mod login_form;

pub use button::Button;
pub use layout::AppLayout;
pub use login_form::{LoginForm, LoginFormState};
