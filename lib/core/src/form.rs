//! Login form field model.

/// A text field of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginField {
    /// The account identifier.
    Identifier,
    /// The account password.
    Password,
}

impl LoginField {
    /// Both fields, in rendering order.
    pub const ALL: [LoginField; 2] = [LoginField::Identifier, LoginField::Password];

    /// Returns the HTML `id` and `name` of the field's input.
    #[must_use]
    pub const fn input_id(&self) -> &'static str {
        match self {
            Self::Identifier => "user-id",
            Self::Password => "password",
        }
    }

    /// Returns the label text shown next to the field.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Identifier => "아이디",
            Self::Password => "비밀번호",
        }
    }
}
