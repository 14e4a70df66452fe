//! Minimal form model shared by the login and password pages: named string
//! fields, per-field rules and a `submitted` flag that gates error display.

/// Validation rules a field can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRule {
    /// Fails only for an empty string; whitespace counts as a value.
    Required,
}

impl FieldRule {
    fn violated_by(self, value: &str) -> bool {
        match self {
            FieldRule::Required => value.is_empty(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rules: &'static [FieldRule],
}

impl FieldSpec {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            rules: &[FieldRule::Required],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Field {
    spec: FieldSpec,
    value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormModel {
    fields: Vec<Field>,
    submitted: bool,
}

impl FormModel {
    pub fn new(specs: &[FieldSpec]) -> Self {
        Self {
            fields: specs
                .iter()
                .map(|spec| Field {
                    spec: *spec,
                    value: String::new(),
                })
                .collect(),
            submitted: false,
        }
    }

    /// Updates a field value. Returns `false` for unknown field names.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|field| field.spec.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|field| field.value.as_str())
    }

    /// Whether `name` currently violates `rule`, regardless of submission.
    pub fn has_error(&self, name: &str, rule: FieldRule) -> bool {
        self.field(name).is_some_and(|field| {
            field.spec.rules.contains(&rule) && rule.violated_by(&field.value)
        })
    }

    /// Error state as the views render it: only after the first submit.
    pub fn shows_error(&self, name: &str, rule: FieldRule) -> bool {
        self.submitted && self.has_error(name, rule)
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|field| {
            field
                .spec
                .rules
                .iter()
                .all(|rule| !rule.violated_by(&field.value))
        })
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Marks the form submitted and reports whether it may be sent.
    pub fn begin_submit(&mut self) -> bool {
        self.submitted = true;
        self.is_valid()
    }

    fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.spec.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldRule, FieldSpec, FormModel};

    const SPECS: [FieldSpec; 2] = [
        FieldSpec::required("email"),
        FieldSpec {
            name: "note",
            rules: &[],
        },
    ];

    #[test]
    fn empty_required_field_is_invalid() {
        let form = FormModel::new(&SPECS);
        assert!(!form.is_valid());
        assert!(form.has_error("email", FieldRule::Required));
        assert!(!form.has_error("note", FieldRule::Required));
    }

    #[test]
    fn errors_show_only_after_submit() {
        let mut form = FormModel::new(&SPECS);
        assert!(!form.shows_error("email", FieldRule::Required));

        assert!(!form.begin_submit());
        assert!(form.submitted());
        assert!(form.shows_error("email", FieldRule::Required));
    }

    #[test]
    fn whitespace_satisfies_required() {
        let mut form = FormModel::new(&SPECS);
        form.set("email", " ");
        assert!(form.is_valid());
    }

    #[test]
    fn set_rejects_unknown_fields() {
        let mut form = FormModel::new(&SPECS);
        assert!(form.set("email", "a@b.c"));
        assert!(!form.set("phone", "123"));
        assert_eq!(form.value("email"), Some("a@b.c"));
        assert_eq!(form.value("phone"), None);
    }
}
