use crate::error::AppError;
use crate::model::Document;
use std::path::{Path, PathBuf};

const STORE_FILE_NAME: &str = ".jarvis_cli_data.json";
const STORE_ENV_VAR: &str = "JARVIS_STORE_PATH";

pub fn store_path() -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var(STORE_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    let home = dirs::home_dir()
        .ok_or_else(|| AppError::invalid_data("home directory is not available"))?;
    Ok(home.join(STORE_FILE_NAME))
}

pub fn load_document(path: &Path) -> Result<Document, AppError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "store missing, starting empty");
        return Ok(Document::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|err| AppError::io(format!("{}: {}", path.display(), err)))?;
    let document: Document = serde_json::from_str(&content).map_err(|err| {
        AppError::invalid_data(format!("invalid JSON in {}: {}", path.display(), err))
    })?;

    tracing::debug!(
        path = %path.display(),
        tasks = document.tasks.len(),
        events = document.events.len(),
        "loaded store"
    );
    Ok(document)
}

pub fn save_document(path: &Path, document: &Document) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(document)
        .map_err(|err| AppError::invalid_data(err.to_string()))?;
    std::fs::write(path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(path, permissions)?;
    }

    tracing::debug!(path = %path.display(), "saved store");
    Ok(())
}
