pub mod auth;
pub mod queue;
pub mod scheduling;

/// Treats an empty string the same as an absent field.
fn filled(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
