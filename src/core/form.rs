use crate::input::Input;
use indexmap::IndexMap;
use serde::Serialize;

pub type FieldId = String;

/// Current value of every declared field, in declaration order. All values
/// are kept as text, even semantically numeric or date-typed ones.
pub type FormValues = IndexMap<FieldId, String>;

/// Validation failures keyed by field; an absent key means the field passed
/// on the last submit attempt.
pub type FieldErrors = IndexMap<FieldId, String>;

/// A single-screen form: ordered input widgets plus optional derived-age
/// wiring.
pub struct Form {
    pub name: String,
    pub title: String,
    pub hint: Option<String>,
    pub fields: Vec<Box<dyn Input>>,
    pub age_source: Option<FieldId>,
}

impl Form {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            hint: None,
            fields: Vec::new(),
            age_source: None,
        }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn field(mut self, input: impl Input + 'static) -> Self {
        self.fields.push(Box::new(input));
        self
    }

    /// Declares the field whose value feeds the derived `age` on submit.
    pub fn age_from(mut self, id: impl Into<FieldId>) -> Self {
        self.age_source = Some(id.into());
        self
    }

    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.id().clone(), f.value()))
            .collect()
    }

    pub fn field_index(&self, id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id() == id)
    }
}

/// The payload emitted on a successful submit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub form: String,
    pub values: FormValues,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl Submission {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Form, Submission};
    use crate::input::{CharPolicy, Input, TextInput};
    use indexmap::IndexMap;

    #[test]
    fn values_snapshot_preserves_declaration_order() {
        let mut form = Form::new("personal", "Personal data")
            .field(TextInput::new("name", "Name"))
            .field(TextInput::new("surname", "Surname"));
        form.fields[1].set_value("Silva".to_string());

        let values = form.values();
        let keys: Vec<&str> = values.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "surname"]);
        assert_eq!(values["surname"], "Silva");
    }

    #[test]
    fn snapshot_reflects_field_policy() {
        let form = Form::new("personal", "Personal data").field(
            TextInput::new("salary", "Salary").with_policy(CharPolicy::Digits { max: None }),
        );
        assert_eq!(form.values()["salary"], "");
    }

    #[test]
    fn submission_serializes_age_only_when_present() {
        let mut values = IndexMap::new();
        values.insert("name".to_string(), "Ana".to_string());

        let with_age = Submission {
            form: "personal".to_string(),
            values: values.clone(),
            age: Some(24),
        };
        let json = serde_json::to_value(&with_age).unwrap();
        assert_eq!(json["age"], 24);
        assert_eq!(json["values"]["name"], "Ana");

        let without_age = Submission {
            form: "contact".to_string(),
            values,
            age: None,
        };
        let json = serde_json::to_value(&without_age).unwrap();
        assert!(json.get("age").is_none());
    }
}
