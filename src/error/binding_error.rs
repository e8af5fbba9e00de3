use thiserror::Error;

/// Represents all errors that can occur when reading a `name=value` binding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The binding has no `=` separator.
    #[error("Binding '{binding}' must have the form name=value.")]
    MissingSeparator {
        /// The binding as written.
        binding: String,
    },
    /// The name is not a single ASCII letter.
    #[error("Binding name '{name}' must be a single letter.")]
    InvalidName {
        /// The name as written.
        name: String,
    },
    /// The value is not a recognised truth value.
    #[error("Binding value '{value}' is not one of true, false, t, f, 1 or 0.")]
    InvalidValue {
        /// The value as written.
        value: String,
    },
}
