use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured parts of a space-delimited full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameParts {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
}

impl fmt::Display for NameParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "firstName: {}", self.first_name)?;
        writeln!(f, "middleName: {}", self.middle_name)?;
        write!(f, "lastName: {}", self.last_name)
    }
}

/// Split a full name on single spaces: first token becomes the first name,
/// the final token the last name, and the second token the middle name iff
/// the input has exactly three tokens.
///
/// No validation is performed; a single-token input sets first and last
/// name to the same token, and runs of spaces produce empty tokens.
pub fn analyze_name(name: &str) -> NameParts {
    let parts: Vec<&str> = name.split(' ').collect();

    // split() always yields at least one token, even for empty input
    let first_name = parts[0].to_string();
    let last_name = parts[parts.len() - 1].to_string();
    let middle_name = if parts.len() == 3 {
        parts[1].to_string()
    } else {
        String::new()
    };

    NameParts {
        first_name,
        middle_name,
        last_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let parts = analyze_name("John Quincy Adams");
        let json = serde_json::to_value(&parts).unwrap();
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["middleName"], "Quincy");
        assert_eq!(json["lastName"], "Adams");
    }

    #[test]
    fn deserializes_from_camel_case_keys() {
        let json = r#"{"firstName":"James","middleName":"","lastName":"Bond"}"#;
        let parts: NameParts = serde_json::from_str(json).unwrap();
        assert_eq!(parts, analyze_name("James Bond"));
    }
}
