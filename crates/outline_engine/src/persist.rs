use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("state directory unusable: {0}")]
    StateDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Create `dir` when missing. A path that exists but is not a directory is
/// rejected.
pub fn ensure_state_dir(dir: &Path) -> Result<(), PersistError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(PersistError::StateDir(format!(
            "{} is not a directory",
            dir.display()
        ))),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|e| PersistError::StateDir(e.to_string()))
        }
        Err(err) => Err(PersistError::StateDir(err.to_string())),
    }
}

/// Replaces settings files through a sibling temp file and a rename, so a
/// concurrent reader sees either the old or the new settings.
#[derive(Debug, Clone)]
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_state_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(content.as_bytes())?;
        staged.as_file_mut().sync_all()?;
        staged.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::ensure_state_dir;

    #[test]
    fn missing_directories_are_created_without_leftovers() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");

        ensure_state_dir(&nested).unwrap();
        ensure_state_dir(&nested).unwrap();

        assert!(nested.is_dir());
        assert_eq!(std::fs::read_dir(&nested).unwrap().count(), 0);
    }
}
