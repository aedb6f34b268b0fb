use crate::auth::{GEMINI_PROVIDER, YOUTUBE_PROVIDER};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ProviderConfigSchema {
    pub fields: Vec<Field>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub enum FieldType {
    Text,
    Secret, // API keys and anything else that must not be echoed
    Number,
}

impl ProviderConfigSchema {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.required)
    }
}

fn timeout_field() -> Field {
    Field {
        name: "timeout_secs".into(),
        label: "Request Timeout (seconds)".into(),
        field_type: FieldType::Number,
        required: false,
        description: Some("Per-request timeout, default 10".into()),
    }
}

/// Fields a provider understands in its stored `AuthDetails`.
pub fn config_schema(provider: &str) -> Option<ProviderConfigSchema> {
    match provider {
        YOUTUBE_PROVIDER => Some(ProviderConfigSchema {
            fields: vec![
                Field {
                    name: "api_key".into(),
                    label: "YouTube Data API Key".into(),
                    field_type: FieldType::Secret,
                    required: true,
                    description: Some("Or set YOUTUBE_API_KEY".into()),
                },
                Field {
                    name: "base_url".into(),
                    label: "API Base URL".into(),
                    field_type: FieldType::Text,
                    required: false,
                    description: Some("Defaults to https://www.googleapis.com/youtube/v3/".into()),
                },
                timeout_field(),
            ],
        }),
        GEMINI_PROVIDER => Some(ProviderConfigSchema {
            fields: vec![
                Field {
                    name: "api_key".into(),
                    label: "Gemini API Key".into(),
                    field_type: FieldType::Secret,
                    required: true,
                    description: Some("Or set GEMINI_API_KEY / GOOGLE_API_KEY".into()),
                },
                Field {
                    name: "model".into(),
                    label: "Model".into(),
                    field_type: FieldType::Text,
                    required: false,
                    description: Some("e.g., gemini-1.5-flash".into()),
                },
                Field {
                    name: "base_url".into(),
                    label: "API Base URL".into(),
                    field_type: FieldType::Text,
                    required: false,
                    description: None,
                },
                timeout_field(),
            ],
        }),
        _ => None,
    }
}
