use serde::Serialize;

/// A single validation constraint attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", content = "value", rename_all = "snake_case")]
pub enum Rule {
    /// Value must be present and not blank
    Required,
    /// Value must have at least N characters
    MinLength(usize),
    /// Value must have at most N characters
    MaxLength(usize),
    /// Value must look like `local@domain.tld`
    Email,
}

impl Rule {
    /// Check a non-blank value against this rule.
    ///
    /// Returns the user-facing message when the rule fails. Blank values are
    /// handled by the owning field before any rule runs.
    pub fn check(&self, label: &str, value: &str) -> Option<String> {
        match *self {
            Rule::Required => None,
            Rule::MinLength(min) => {
                (value.chars().count() < min)
                    .then(|| format!("{label} length must be {min} characters"))
            }
            Rule::MaxLength(max) => {
                (value.chars().count() > max)
                    .then(|| format!("{label} must not exceed {max} characters"))
            }
            Rule::Email => {
                (!is_email_shaped(value)).then(|| "Enter a valid email address".to_string())
            }
        }
    }
}

/// Loose shape check: one `@`, non-empty local part, dotted domain, no spaces.
pub fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
