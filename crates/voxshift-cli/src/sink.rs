//! Directory-backed export sink.

use std::fs;
use std::path::{Path, PathBuf};

use voxshift_backend_audio::{AudioError, AudioResult, ExportArtifact, ExportSink};

/// Writes exported artifacts into a directory under their suggested names.
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    /// Creates a sink targeting `dir`. The directory is created on first export.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Paths written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ExportSink for DirectorySink {
    fn export(&mut self, artifact: &ExportArtifact) -> AudioResult<()> {
        let name = &artifact.suggested_filename;
        let is_plain_name = Path::new(name).file_name().and_then(|n| n.to_str()) == Some(name);
        if name.is_empty() || !is_plain_name {
            return Err(AudioError::invalid_param(
                "suggested_filename",
                format!("'{}' is not a plain file name", name),
            ));
        }

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        fs::write(&path, &artifact.bytes)?;
        tracing::info!(path = %path.display(), bytes = artifact.bytes.len(), "exported");
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_into_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("renders");
        let mut sink = DirectorySink::new(&out_dir);

        sink.export(&ExportArtifact::wav(vec![1, 2, 3], "take"))
            .unwrap();

        let expected = out_dir.join("take.wav");
        assert_eq!(sink.written(), &[expected.clone()]);
        assert_eq!(fs::read(expected).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_rejects_path_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(tmp.path());
        let artifact = ExportArtifact::wav(vec![0], "../escape");
        assert!(sink.export(&artifact).is_err());
        assert!(sink.written().is_empty());
    }
}
