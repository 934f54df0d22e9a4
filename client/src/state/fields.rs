//! Static presentation metadata for form fields.

/// Label, input kind and placeholder for one controlled field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
}

pub const USERNAME: FieldSpec = FieldSpec {
    label: "Username",
    input_type: "text",
    placeholder: "Choose a username",
};

pub const EMAIL: FieldSpec = FieldSpec {
    label: "Email",
    input_type: "email",
    placeholder: "Enter your email",
};

pub const PASSWORD: FieldSpec = FieldSpec {
    label: "Password",
    input_type: "password",
    placeholder: "Enter your password",
};
