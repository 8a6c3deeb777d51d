use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// One record of `activities.json`. Keys other than these are ignored.
///
/// Only `image_path` is typed strictly. `title` and `id` are kept as raw JSON
/// so that a pass which never reads them cannot fail on their shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub image_path: PathBuf,

    #[serde(default)]
    pub title: Option<Value>,

    #[serde(default)]
    pub id: Option<Value>,
}

impl Activity {
    pub fn new<P: Into<PathBuf>>(image_path: P) -> Self {
        Self {
            image_path: image_path.into(),
            title: None,
            id: None,
        }
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(Value::String(title.into()));
        self
    }

    /// `id` rendered for log fields: strings as-is, anything else as JSON.
    pub fn display_id(&self) -> Option<String> {
        self.id.as_ref().map(|id| match id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}
