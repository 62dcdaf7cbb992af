//! Loading compared artifacts from disk.

use std::fs;
use std::io;
use std::path::Path;

use linedelta_types::LineSequence;

use crate::error::{SdkError, SdkResult};

/// Read a UTF-8 text file into lines.
pub fn read_lines(path: &Path) -> SdkResult<LineSequence> {
    let bytes = fs::read(path).map_err(|e| io_error(path, e))?;
    let text =
        String::from_utf8(bytes).map_err(|_| SdkError::InvalidEncoding(path.display().to_string()))?;
    Ok(LineSequence::from_text(&text))
}

/// Report label of a path: its file name, or the whole path if it has none.
pub fn label_for(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub(crate) fn io_error(path: &Path, source: io::Error) -> SdkError {
    if source.kind() == io::ErrorKind::NotFound {
        SdkError::NotFound(path.display().to_string())
    } else {
        SdkError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Foo.java");
        fs::write(&path, "public class Foo {\r\n}\r\n").unwrap();
        let lines = read_lines(&path).unwrap();
        assert_eq!(lines.as_slice(), &["public class Foo {".to_string(), "}".to_string()]);
    }

    #[test]
    fn classic_mac_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Foo.java");
        fs::write(&path, "public class Foo {\r}\r").unwrap();
        let lines = read_lines(&path).unwrap();
        assert_eq!(lines.as_slice(), &["public class Foo {".to_string(), "}".to_string()]);
    }

    #[test]
    fn empty_file_has_no_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();
        assert!(read_lines(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_lines(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, SdkError::NotFound(_)));
    }

    #[test]
    fn binary_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0xFFu8, 0xFE, 0x00, 0x80]).unwrap();
        assert!(matches!(read_lines(&path), Err(SdkError::InvalidEncoding(_))));
    }

    #[test]
    fn label_is_file_name() {
        assert_eq!(label_for(Path::new("/tmp/src/Foo.java")), "Foo.java");
        assert_eq!(label_for(Path::new("/")), "/");
    }
}
