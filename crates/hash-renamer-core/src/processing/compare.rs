use crate::processing::CHUNK_SIZE;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Check whether two files hold exactly the same bytes.
///
/// Sizes are compared first; contents are then streamed side by side in
/// fixed-size chunks and the comparison stops at the first difference.
pub fn files_identical<P: AsRef<Path>, Q: AsRef<Path>>(a: P, b: Q) -> io::Result<bool> {
    let mut file_a = File::open(a)?;
    let mut file_b = File::open(b)?;

    if file_a.metadata()?.len() != file_b.metadata()?.len() {
        return Ok(false);
    }

    let mut buffer_a = [0; CHUNK_SIZE];
    let mut buffer_b = [0; CHUNK_SIZE];
    loop {
        let read_a = read_chunk(&mut file_a, &mut buffer_a)?;
        let read_b = read_chunk(&mut file_b, &mut buffer_b)?;

        if read_a != read_b || buffer_a[..read_a] != buffer_b[..read_b] {
            return Ok(false);
        }
        if read_a == 0 {
            return Ok(true);
        }
    }
}

/// Fill the buffer as far as possible; short only at end of file
fn read_chunk<R: Read>(reader: &mut R, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_identical_files() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        let data: Vec<u8> = (0..(CHUNK_SIZE * 2 + 7)).map(|i| (i % 13) as u8).collect();
        fs::write(&a, &data).unwrap();
        fs::write(&b, &data).unwrap();

        assert!(files_identical(&a, &b).unwrap());
    }

    #[test]
    fn test_same_size_different_content() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        let mut data: Vec<u8> = vec![7; CHUNK_SIZE + 10];
        fs::write(&a, &data).unwrap();
        // Differ only in the last chunk
        data[CHUNK_SIZE + 5] = 8;
        fs::write(&b, &data).unwrap();

        assert!(!files_identical(&a, &b).unwrap());
    }

    #[test]
    fn test_different_sizes() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, b"abc").unwrap();
        fs::write(&b, b"abcd").unwrap();

        assert!(!files_identical(&a, &b).unwrap());
    }

    #[test]
    fn test_empty_files() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, b"").unwrap();
        fs::write(&b, b"").unwrap();

        assert!(files_identical(&a, &b).unwrap());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        fs::write(&a, b"abc").unwrap();

        assert!(files_identical(&a, dir.path().join("missing")).is_err());
    }
}
