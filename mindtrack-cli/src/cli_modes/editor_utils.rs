use anyhow::Result;
use std::{fs, path::Path, process::Command};

pub fn resolve_editor(editor: &Option<String>) -> String {
    editor
        .as_deref()
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into())
}

/// Opens `editor_cmd` on a temporary file holding `initial` and returns what was saved.
pub fn create_editor_buffer(editor_cmd: &str, initial: &str) -> Result<String> {
    let file = tempfile::Builder::new()
        .prefix("mindtrack")
        .suffix(".txt")
        .tempfile()?;

    let path = file.path().to_path_buf();
    fs::write(&path, initial)?;
    open_file_in_editor(editor_cmd, &path)?;
    Ok(fs::read_to_string(&path)?)
}

pub fn open_file_in_editor(editor_cmd: &str, path: &Path) -> Result<()> {
    let status = Command::new(editor_cmd).arg(path).status()?;
    if !status.success() {
        anyhow::bail!("Editor exited with status {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_editor_wins() {
        assert_eq!(resolve_editor(&Some("hx".to_string())), "hx");
    }

    #[cfg(unix)]
    #[test]
    fn buffer_returns_saved_content() {
        // `true` exits successfully without touching the file.
        let content = create_editor_buffer("true", "draft text").unwrap();
        assert_eq!(content, "draft text");
    }

    #[cfg(unix)]
    #[test]
    fn failing_editor_is_an_error() {
        assert!(create_editor_buffer("false", "").is_err());
    }
}
