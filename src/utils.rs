use crate::Result;
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::Path;

/// Read a file to a `String`, or `None` if there is no file at `path`.
pub(crate) async fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) => match e.kind() {
            ErrorKind::NotFound => Ok(None),
            _ => Err(e).with_context(|| format!("Failed to read file at {}", path.display())),
        },
    }
}

/// Deserialize JSON `content` that was read from `path` into type `T`.
pub(crate) fn deserialize<T>(path: &Path, content: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(content)
        .with_context(|| format!("Failed to parse JSON file at {}", path.display()))
}
