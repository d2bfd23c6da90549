//! Core domain types for the nodebird web front end.
//!
//! This crate holds the framework-independent pieces of the login flow:
//! the login form's field model and the application's navigable routes.

pub mod error;
pub mod form;
pub mod route;

pub use error::Result;
pub use form::LoginField;
pub use route::AppRoute;
