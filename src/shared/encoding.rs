//! File-to-base64 helpers for uploading certificate (`.cer`) and private key
//! (`.key`) files.

use base64::engine::general_purpose::STANDARD;
use base64::write::EncoderWriter;
use base64::Engine;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Read a file and return its contents as a standard base64 string.
pub fn file_to_base64(path: impl AsRef<Path>) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(STANDARD.encode(bytes))
}

/// Stream a file's contents, base64-encoded, into `output`.
pub fn file_to_base64_writer<W: Write>(path: impl AsRef<Path>, output: W) -> io::Result<()> {
    let mut input = File::open(path)?;
    let mut encoder = EncoderWriter::new(output, &STANDARD);
    io::copy(&mut input, &mut encoder)?;
    encoder.finish()?;
    Ok(())
}

/// Base64-encode `input` into a new file at `output`.
pub fn base64_encode_to_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> io::Result<()> {
    let out = File::create(output)?;
    file_to_base64_writer(input, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_to_base64() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cert.cer");
        std::fs::write(&path, b"hello facturama").unwrap();

        assert_eq!(file_to_base64(&path).unwrap(), "aGVsbG8gZmFjdHVyYW1h");
    }

    #[test]
    fn test_writer_matches_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.key");
        std::fs::write(&path, vec![0u8, 1, 2, 250, 251, 252, 253]).unwrap();

        let mut buf = Vec::new();
        file_to_base64_writer(&path, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), file_to_base64(&path).unwrap());

        let out = dir.path().join("key.b64");
        base64_encode_to_file(&path, &out).unwrap();
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            file_to_base64(&path).unwrap()
        );
    }

    #[test]
    fn test_missing_file() {
        let err = file_to_base64("/definitely/not/here.cer").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
