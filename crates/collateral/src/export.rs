//! Writing finished artifacts to disk.
//!
//! Bytes are staged in a sibling `*.partial` file and renamed onto the target
//! once fully written, so a failed run never leaves a truncated artifact under
//! the final name.  The staging file is guarded by [`TempArtifact`], which
//! removes it on every exit path that does not reach the rename.  I/O failures
//! are returned unmodified; a one-shot local file write warrants no retry.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

/// RAII guard for an intermediate file: deletes it on drop unless disarmed.
pub struct TempArtifact {
    path: PathBuf,
    armed: bool,
}

impl TempArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            armed: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keeps the file: called after it has been renamed away or handed off.
    pub fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// The staging path used while writing `target`.
pub fn partial_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    target.with_file_name(name)
}

/// Writes `bytes` to `target` through the staging file.
pub fn write_artifact(bytes: &[u8], target: &Path) -> io::Result<()> {
    let partial = partial_path(target);
    let guard = TempArtifact::new(&partial);

    let mut file = fs::File::create(guard.path())?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);

    fs::rename(guard.path(), target)?;
    guard.disarm();

    debug!("wrote {} bytes to {}", bytes.len(), target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("collateral-export-{}-{}", tag, std::process::id()));
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn successful_write_leaves_only_the_target() {
        let dir = scratch_dir("ok");
        let target = dir.join("book.pdf");

        write_artifact(b"%PDF-1.5 stub", &target).expect("write succeeds");

        assert_eq!(fs::read(&target).expect("read back"), b"%PDF-1.5 stub");
        assert!(!partial_path(&target).exists());

        fs::remove_dir_all(&dir).expect("cleanup scratch dir");
    }

    #[test]
    fn failed_write_leaves_no_partial_file() {
        let dir = scratch_dir("missing");
        let target = dir.join("does-not-exist").join("book.pdf");

        let err = write_artifact(b"bytes", &target).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!partial_path(&target).exists());

        fs::remove_dir_all(&dir).expect("cleanup scratch dir");
    }

    #[test]
    fn guard_removes_file_unless_disarmed() {
        let dir = scratch_dir("guard");
        let staged = dir.join("artifact.partial");

        fs::write(&staged, b"staged").expect("stage file");
        drop(TempArtifact::new(&staged));
        assert!(!staged.exists());

        fs::write(&staged, b"staged").expect("stage file again");
        TempArtifact::new(&staged).disarm();
        assert!(staged.exists());

        fs::remove_dir_all(&dir).expect("cleanup scratch dir");
    }

    #[test]
    fn partial_path_appends_suffix() {
        assert_eq!(
            partial_path(Path::new("/tmp/out/book.pdf")),
            Path::new("/tmp/out/book.pdf.partial")
        );
    }
}
