//! Declarative description of the editable fields of a record type.
//!
//! A `Schema` is built once per widget instance and never changes afterwards.
//! The draft form, the validation gate and the inline error messages are all
//! driven from it.

use serde::Serialize;

use crate::error::EditorError;

/// How a field is entered and stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Single-line text input holding a link target.
    Url,
    /// `<textarea>` input.
    MultiLine,
    /// A list of short strings collected one at a time (bullet points).
    List,
    /// A single uploaded file, stored as an `Attachment`.
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
    /// Value committed when an optional field is left empty.
    pub default: Option<&'static str>,
    /// Character budget, counted in Unicode scalar values.
    pub max_chars: Option<usize>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: "",
            default: None,
            max_chars: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub const fn default_value(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    pub const fn max_chars(mut self, limit: usize) -> Self {
        self.max_chars = Some(limit);
        self
    }

    /// Checks `value` against the character budget, if any.
    pub fn check_length(&self, value: &str) -> Result<(), EditorError> {
        match self.max_chars {
            Some(limit) => {
                let actual = value.chars().count();
                if actual > limit {
                    Err(EditorError::LengthExceeded {
                        field: self.name.to_string(),
                        limit,
                        actual,
                    })
                } else {
                    Ok(())
                }
            }
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn require(&self, name: &str) -> Result<&FieldSpec, EditorError> {
        self.field(name)
            .ok_or_else(|| EditorError::UnknownField(name.to_string()))
    }

    /// Fields whose input is typed by the user (everything except files).
    pub fn inputs(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.kind != FieldKind::File)
    }

    fn label_of<'a>(&'a self, name: &'a str) -> &'a str {
        self.field(name).map(|f| f.label).unwrap_or(name)
    }

    /// Turns an error into the inline message shown under the form.
    pub fn describe(&self, err: &EditorError) -> String {
        match err {
            EditorError::Validation { missing } => match missing.as_slice() {
                [single] => format!("{} cannot be empty", self.label_of(single)),
                many => {
                    let labels: Vec<&str> = many.iter().map(|m| self.label_of(m)).collect();
                    format!("Please fill in: {}", labels.join(", "))
                }
            },
            EditorError::LengthExceeded { field, limit, .. } => {
                format!("{} must be {} characters or less", self.label_of(field), limit)
            }
            other => other.to_string(),
        }
    }
}
