//! OpenAPI Contract
//!
//! Builds the OpenAPI document from the API router and writes it to disk so
//! client bindings can be generated from it.

use std::{fs, io, path::Path};

use salvo::{Router, oapi::OpenApi};
use thiserror::Error;
use tracing::info;

/// Contract title.
pub(crate) const TITLE: &str = "Monorepo API";

/// Contract version.
pub(crate) const VERSION: &str = "1.0.0";

#[derive(Debug, Error)]
pub(crate) enum ContractError {
    #[error("failed to create contract directory: {0}")]
    CreateDir(#[source] io::Error),

    #[error("failed to serialize contract: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write contract: {0}")]
    Write(#[source] io::Error),
}

/// Describe every endpoint mounted on `router`.
pub(crate) fn document(router: &Router) -> OpenApi {
    OpenApi::new(TITLE, VERSION).merge_router(router)
}

/// Serialize the document as pretty JSON with a trailing newline.
pub(crate) fn render(doc: &OpenApi) -> Result<String, ContractError> {
    let mut json = doc.to_pretty_json().map_err(ContractError::Serialize)?;

    json.push('\n');

    Ok(json)
}

/// Write the document to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the document cannot
/// be serialized, or the file cannot be written.
pub(crate) fn export(doc: &OpenApi, path: &Path) -> Result<(), ContractError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(ContractError::CreateDir)?;
    }

    let json = render(doc)?;

    fs::write(path, json.as_bytes()).map_err(ContractError::Write)?;

    info!(path = %path.display(), bytes = json.len(), "wrote openapi contract");

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use tempfile::TempDir;
    use testresult::TestResult;

    use crate::router::api_router;

    use super::*;

    #[test]
    fn test_export_is_byte_identical_across_runs() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("v1.json");
        let doc = document(&api_router());

        export(&doc, &path)?;
        let first = fs::read(&path)?;

        export(&document(&api_router()), &path)?;
        let second = fs::read(&path)?;

        assert_eq!(first, second);
        assert_eq!(first.last(), Some(&b'\n'));

        Ok(())
    }

    #[test]
    fn test_export_describes_every_route() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("v1.json");

        export(&document(&api_router()), &path)?;

        let contract: Value = serde_json::from_slice(&fs::read(&path)?)?;

        assert_eq!(contract["info"]["title"], TITLE);
        assert_eq!(contract["info"]["version"], VERSION);

        for route in ["/hello", "/health", "/v1/users", "/v1/users/{id}"] {
            assert!(
                contract["paths"].get(route).is_some(),
                "contract is missing {route}"
            );
        }

        let user = &contract["paths"]["/v1/users/{id}"];

        for method in ["get", "put", "delete"] {
            assert!(user.get(method).is_some(), "contract is missing {method}");
        }

        Ok(())
    }

    #[test]
    fn test_export_creates_missing_directories() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("packages/api/src/contracts/v1.json");

        export(&document(&api_router()), &path)?;

        assert!(path.is_file(), "contract file should exist");

        Ok(())
    }

    #[test]
    fn test_export_fails_when_parent_is_a_file() -> TestResult {
        let dir = TempDir::new()?;
        let blocker = dir.path().join("contracts");

        fs::write(&blocker, "not a directory")?;

        let result = export(&document(&api_router()), &blocker.join("v1.json"));

        assert!(
            matches!(result, Err(ContractError::CreateDir(_))),
            "expected a directory creation error, got {result:?}"
        );

        Ok(())
    }
}
