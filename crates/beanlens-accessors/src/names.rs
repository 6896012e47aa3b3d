//! Bean accessor naming rules.

use beanlens_types::JavaType;

/// Getter name implied by a field's resolved type and name.
///
/// Boolean primitive fields use the `is` prefix; a field already named in
/// accessor form (`is` followed by an upper-case letter, e.g. `isActive`)
/// keeps its name instead of doubling the prefix. Boxed `Boolean` and
/// unresolved types take the `get` branch.
#[must_use]
pub fn derive_getter_name(ty: Option<&JavaType>, field_name: &str) -> String {
    if ty.is_some_and(JavaType::is_primitive_boolean) {
        if is_accessor_form(field_name) {
            return field_name.to_string();
        }
        return format!("is{}", capitalize(field_name));
    }
    format!("get{}", capitalize(field_name))
}

/// Setter name implied by a field name.
#[must_use]
pub fn derive_setter_name(field_name: &str) -> String {
    format!("set{}", capitalize(field_name))
}

/// Bean property implied by a field.
///
/// The field name itself, except that a boolean field already in accessor
/// form maps back to the bare property: `isActive` becomes `active`.
#[must_use]
pub fn property_name(ty: Option<&JavaType>, field_name: &str) -> String {
    if ty.is_some_and(JavaType::is_primitive_boolean) {
        if let Some(rest) = field_name.strip_prefix("is") {
            if starts_upper(rest) {
                return decapitalize(rest);
            }
        }
    }
    field_name.to_string()
}

/// `is` followed immediately by an ASCII upper-case letter.
fn is_accessor_form(field_name: &str) -> bool {
    field_name
        .strip_prefix("is")
        .is_some_and(|rest| starts_upper(rest))
}

fn starts_upper(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Upper-cases the first character; the rest of the name is untouched.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Lower-cases the first character; the rest of the name is untouched.
#[must_use]
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}
