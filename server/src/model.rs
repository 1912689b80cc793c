use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Body of `POST /api/todos`.
///
/// `text` is kept as raw JSON so a missing, null or non-string value is
/// reported as a validation failure (400) rather than a body rejection.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default, alias = "todotext")]
    pub text: Option<Value>,
    #[serde(default)]
    pub completed: bool,
}

/// Body of `PUT /api/todos/{id}`; only the fields present are applied.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    #[serde(default, alias = "todotext")]
    pub text: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}
