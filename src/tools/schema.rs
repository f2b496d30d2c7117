use std::fmt;

use serde::Serialize;

/// Primitive a parameter type collapses to in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum ArgType {
    Int,
    Float,
    Boolean,
    String,
}

impl ArgType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ArgType::Int => "int",
            ArgType::Float => "float",
            ArgType::Boolean => "boolean",
            ArgType::String => "string",
        }
    }
}

impl From<ArgType> for &'static str {
    fn from(arg_type: ArgType) -> Self {
        arg_type.as_str()
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgSchema {
    pub name: String,
    pub title: String,
    pub description: String,
    pub arg_type: ArgType,
    pub required: bool,
}

impl ArgSchema {
    /// Schema for parameter `name`; description is the name itself and the
    /// title its human-readable form.
    pub fn new(name: impl Into<String>, arg_type: ArgType, required: bool) -> Self {
        let name = name.into();
        Self {
            title: title_case(&name),
            description: name.clone(),
            name,
            arg_type,
            required,
        }
    }
}

/// `personal_email_address` -> `Personal Email Address`.
///
/// Every run of letters starts upper-case and continues lower-case, so
/// `office_365account` becomes `Office 365Account`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;
    for c in name.replace('_', " ").chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_replaces_underscores() {
        assert_eq!(title_case("personal_email_address"), "Personal Email Address");
        assert_eq!(title_case("human_email"), "Human Email");
    }

    #[test]
    fn title_case_restarts_words_after_digits() {
        assert_eq!(title_case("office_365account"), "Office 365Account");
        assert_eq!(title_case("EMAIL"), "Email");
        assert_eq!(title_case("_leading"), " Leading");
    }

    #[test]
    fn new_schema_uses_name_as_description() {
        let schema = ArgSchema::new("full_name", ArgType::String, true);
        assert_eq!(schema.description, "full_name");
        assert_eq!(schema.title, "Full Name");
        assert_eq!(schema.arg_type.as_str(), "string");
    }

    #[test]
    fn arg_type_serializes_as_its_name() {
        assert_eq!(serde_json::to_string(&ArgType::Boolean).unwrap(), "\"boolean\"");
        assert_eq!(ArgType::Int.to_string(), "int");
    }
}
