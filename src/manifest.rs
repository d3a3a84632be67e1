// src/manifest.rs
//! Registration manifests for the two field interfaces, as data a host
//! admin panel can feed into its extension registry. The option
//! descriptors mirror the configuration surface in `config.rs`.

use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, Serialize)]
pub struct InterfaceManifest {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub group: &'static str,
    pub types: &'static [&'static str],
    pub options: Vec<OptionDescriptor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionDescriptor {
    pub field: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub width: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
}

impl OptionDescriptor {
    const fn new(field: &'static str, name: &'static str, kind: &'static str) -> Self {
        Self {
            field,
            name,
            kind,
            width: "half",
            note: None,
            default_value: None,
            choices: Vec::new(),
        }
    }

    fn full_width(mut self) -> Self {
        self.width = "full";
        self
    }

    fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Choice {
    pub text: &'static str,
    pub value: &'static str,
}

pub fn slug_interface() -> InterfaceManifest {
    InterfaceManifest {
        id: "slug-generator",
        name: "Slug Generator",
        icon: "link",
        description: "Generate and validate a slug from another field",
        group: "standard",
        types: &["string"],
        options: vec![
            OptionDescriptor::new("select_collection", "Source Collection", "string"),
            OptionDescriptor::new("select_field", "Source Field", "string"),
            OptionDescriptor::new("auto", "Auto Generate", "boolean")
                .default_value(json!(true)),
            OptionDescriptor::new("required", "Required", "boolean")
                .default_value(json!(true)),
            OptionDescriptor {
                choices: vec![
                    Choice {
                        text: "Hyphen (-)",
                        value: "-",
                    },
                    Choice {
                        text: "Underscore (_)",
                        value: "_",
                    },
                ],
                ..OptionDescriptor::new("separator", "Separator", "string")
            }
            .default_value(json!("-")),
            OptionDescriptor::new("lowercase", "Lowercase", "boolean")
                .default_value(json!(true)),
            OptionDescriptor::new("placeholder", "Placeholder", "string"),
            OptionDescriptor::new(
                "custom_empty_message",
                "Custom Empty Error Message",
                "string",
            )
            .full_width(),
            OptionDescriptor::new(
                "custom_format_message",
                "Custom Format Error Message",
                "string",
            )
            .full_width(),
            OptionDescriptor::new(
                "custom_unique_message",
                "Custom Uniqueness Error Message",
                "string",
            )
            .full_width(),
        ],
    }
}

pub fn search_interface() -> InterfaceManifest {
    InterfaceManifest {
        id: "search-collection-item",
        name: "Search Collection Item",
        icon: "search",
        description: "Autocomplete search for collection items",
        group: "selection",
        types: &["string"],
        options: vec![
            OptionDescriptor::new("placeholder", "Placeholder", "string"),
            OptionDescriptor {
                note: Some("Choose the collection to search for items in."),
                ..OptionDescriptor::new("field_collection", "Collection", "string")
            },
        ],
    }
}
