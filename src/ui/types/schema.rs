use anyhow::{Context, Result};
use schemars::{JsonSchema, schema_for};
use serde_json::Value;

/// Prompt metadata for one form field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub help: Option<String>,
}

/// Extracts the ordered field specs from a form struct's JSON schema.
///
/// Field order follows struct declaration order: serde_json's
/// `preserve_order` feature keeps the schema's property map
/// insertion-ordered, and the position of each field is the position of
/// the value in the feature vector.
pub fn field_specs<T: JsonSchema>() -> Result<Vec<FieldSpec>> {
    let schema = schema_for!(T);
    let root = schema.as_object().context("root schema is not an object")?;
    let props = root
        .get("properties")
        .and_then(|v| v.as_object())
        .context("schema has no properties")?;

    let mut out = Vec::with_capacity(props.len());
    for (name, field_schema) in props {
        let obj = field_schema
            .as_object()
            .with_context(|| format!("field schema for '{name}' is not an object"))?;

        let title = obj
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(name)
            .to_string();
        let help = obj
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string);

        out.push(FieldSpec {
            name: name.clone(),
            title,
            help,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, JsonSchema)]
    struct Probe {
        #[schemars(title = "First", description = "the first value")]
        alpha: f64,
        #[schemars(title = "Second")]
        beta: f64,
        gamma: f64,
    }

    #[test]
    fn specs_come_back_in_declaration_order() {
        let specs = field_specs::<Probe>().unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn titles_and_help_come_from_the_schema() {
        let specs = field_specs::<Probe>().unwrap();
        assert_eq!(specs[0].title, "First");
        assert_eq!(specs[0].help.as_deref(), Some("the first value"));
        assert_eq!(specs[1].title, "Second");
        assert!(specs[1].help.is_none());
        // Untitled fields fall back to the field name.
        assert_eq!(specs[2].title, "gamma");
    }
}
