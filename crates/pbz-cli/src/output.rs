//! Writing the generated module to disk.

use std::path::Path;

use anyhow::Context;

/// Write `document` to `path`, creating missing parent directories.
pub async fn write_document(path: &Path, document: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    tokio::fs::write(path, document)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = document.len(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src/lib/pocketbase-zod.ts");

        write_document(&path, "export {}\n").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "export {}\n");
    }

    #[tokio::test]
    async fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ts");
        std::fs::write(&path, "old contents that are longer").unwrap();

        write_document(&path, "new\n").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
    }
}
