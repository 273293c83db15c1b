use crate::error::LoadError;
use std::fs;
use std::path::{Path, PathBuf};

/// The full contents of one file, held read-only in memory.
#[derive(Debug)]
pub struct ByteBuffer {
    path: PathBuf,
    bytes: Box<[u8]>,
}

impl ByteBuffer {
    /// Wrap bytes that did not come from [`load`], e.g. in tests and benches.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: impl Into<Box<[u8]>>) -> Self {
        ByteBuffer {
            path: path.into(),
            bytes: bytes.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Read the whole of `path` into a [`ByteBuffer`].
///
/// Existence is not checked up front; whatever the read itself reports
/// (missing file, permissions, a directory) becomes a [`LoadError`] carrying
/// the path.
pub fn load<P: AsRef<Path>>(path: P) -> Result<ByteBuffer, LoadError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(LoadError::EmptyPath);
    }
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(ByteBuffer::from_bytes(path, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_load_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let contents = b"<plist version=\"1.0\"><array/></plist>";
        file.write_all(contents).unwrap();
        let buffer = load(file.path()).unwrap();
        assert_eq!(buffer.as_bytes(), &contents[..]);
        assert_eq!(buffer.len(), contents.len());
        assert_eq!(buffer.path(), file.path());
    }

    #[test]
    fn test_load_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let buffer = load(file.path()).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_load_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.plist");
        match load(&path) {
            Err(LoadError::Io { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }

    #[test]
    fn test_load_empty_path() {
        assert!(matches!(load(""), Err(LoadError::EmptyPath)));
    }
}
