use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered `field path -> expected value` pairs attached to a choice.
pub type Conditions = Map<String, Value>;

/// One entry of the `choices` array, either a bare key or a full definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ChoiceDef {
    Key(String),
    Detailed(DetailedChoice),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetailedChoice {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Conditions>,
}

impl ChoiceDef {
    pub fn key(&self) -> &str {
        match self {
            ChoiceDef::Key(key) => key,
            ChoiceDef::Detailed(choice) => &choice.key,
        }
    }

    pub fn conditions(&self) -> Option<&Conditions> {
        match self {
            ChoiceDef::Key(_) => None,
            ChoiceDef::Detailed(choice) => choice.conditions.as_ref(),
        }
    }
}

impl From<&str> for ChoiceDef {
    fn from(key: &str) -> Self {
        ChoiceDef::Key(key.to_string())
    }
}

impl From<DetailedChoice> for ChoiceDef {
    fn from(choice: DetailedChoice) -> Self {
        ChoiceDef::Detailed(choice)
    }
}
