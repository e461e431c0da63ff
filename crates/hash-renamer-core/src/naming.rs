//! Derivation of hashed file names.
//!
//! A hashed name is `{stem}{separator}{digest}{extension}` where the
//! extension keeps its leading dot. Collisions get a numbered variant
//! `{stem}{separator}{digest}-{i}{extension}`.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Whether the file name already ends with `{separator}{short_digest}`
pub fn has_hash_suffix(path: &Path, separator: &str, short_digest: &str) -> bool {
    let suffix = format!("{}{}", separator, short_digest);

    let stem_matches = path
        .file_stem()
        .map(|stem| ends_with_suffix(&stem.to_string_lossy(), &suffix))
        .unwrap_or(false);

    // A separator containing '.' can make the digest look like an extension
    let name_matches = separator.contains('.')
        && path
            .file_name()
            .map(|name| ends_with_suffix(&name.to_string_lossy(), &suffix))
            .unwrap_or(false);

    stem_matches || name_matches
}

/// `suffix` itself or a numbered collision variant `suffix-{i}`
fn ends_with_suffix(name: &str, suffix: &str) -> bool {
    if name.ends_with(suffix) {
        return true;
    }

    let without_index = name.trim_end_matches(|c: char| c.is_ascii_digit());
    without_index.len() < name.len()
        && without_index
            .strip_suffix('-')
            .map(|rest| rest.ends_with(suffix))
            .unwrap_or(false)
}

/// Sibling path with the digest inserted before the extension.
///
/// `index` selects the numbered collision variant.
pub fn hashed_name(
    path: &Path,
    separator: &str,
    short_digest: &str,
    index: Option<usize>,
) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = path.file_stem() {
        name.push(stem);
    }
    name.push(separator);
    name.push(short_digest);
    if let Some(i) = index {
        name.push(format!("-{}", i));
    }
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }

    path.with_file_name(name)
}

/// Whether anything, including a dangling symlink, occupies the path
pub fn path_occupied(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

/// Whether both paths lead to the same file once links are resolved
pub fn resolves_to(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// First numbered variant `-1`, `-2`, ... that is not occupied.
///
/// Only the current filesystem state is consulted.
pub fn resolve_collision(path: &Path, separator: &str, short_digest: &str) -> PathBuf {
    (1..)
        .map(|i| hashed_name(path, separator, short_digest, Some(i)))
        .find(|candidate| !path_occupied(candidate))
        .unwrap_or_else(|| unreachable!("unbounded candidate sequence"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_hashed_name() {
        let path = Path::new("/assets/photo.png");
        assert_eq!(
            hashed_name(path, "-", "ba7816bf", None),
            PathBuf::from("/assets/photo-ba7816bf.png")
        );
        assert_eq!(
            hashed_name(path, "_", "ba7816bf", Some(3)),
            PathBuf::from("/assets/photo_ba7816bf-3.png")
        );
    }

    #[test]
    fn test_hashed_name_edge_cases() {
        assert_eq!(
            hashed_name(Path::new("README"), "-", "abcd", None),
            PathBuf::from("README-abcd")
        );
        assert_eq!(
            hashed_name(Path::new("archive.tar.gz"), "-", "abcd", None),
            PathBuf::from("archive.tar-abcd.gz")
        );
        assert_eq!(
            hashed_name(Path::new(".env"), "-", "abcd", None),
            PathBuf::from(".env-abcd")
        );
        assert_eq!(
            hashed_name(Path::new("README"), ".", "abcd", Some(1)),
            PathBuf::from("README.abcd-1")
        );
    }

    #[test]
    fn test_has_hash_suffix() {
        assert!(has_hash_suffix(Path::new("photo-ba7816bf.png"), "-", "ba7816bf"));
        assert!(!has_hash_suffix(Path::new("photo.png"), "-", "ba7816bf"));
        assert!(!has_hash_suffix(Path::new("photo-ba7816bf.png"), "_", "ba7816bf"));
        // Numbered collision variants count as hashed
        assert!(has_hash_suffix(Path::new("photo-ba7816bf-1.png"), "-", "ba7816bf"));
        assert!(has_hash_suffix(Path::new("photo-ba7816bf-12.png"), "-", "ba7816bf"));
        assert!(!has_hash_suffix(Path::new("photo-ba7816bf-.png"), "-", "ba7816bf"));
        assert!(!has_hash_suffix(Path::new("photo-ba7816bf-1x.png"), "-", "ba7816bf"));
        assert!(has_hash_suffix(Path::new("README.abcd"), ".", "abcd"));
    }

    #[test]
    fn test_resolve_collision() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("photo.png");
        fs::write(dir.path().join("photo-abcd.png"), b"x").unwrap();
        fs::write(dir.path().join("photo-abcd-1.png"), b"y").unwrap();

        assert_eq!(
            resolve_collision(&source, "-", "abcd"),
            dir.path().join("photo-abcd-2.png")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_resolves_to() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        let other = dir.path().join("other.txt");
        let link = dir.path().join("link.txt");
        fs::write(&file, b"x").unwrap();
        fs::write(&other, b"x").unwrap();
        std::os::unix::fs::symlink(&file, &link).unwrap();

        assert!(resolves_to(&link, &file));
        assert!(resolves_to(&file, &file));
        assert!(!resolves_to(&other, &file));
        assert!(!resolves_to(&dir.path().join("absent"), &file));
    }

    #[test]
    fn test_path_occupied() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("present");
        fs::write(&file, b"x").unwrap();

        assert!(path_occupied(&file));
        assert!(path_occupied(dir.path()));
        assert!(!path_occupied(&dir.path().join("absent")));
    }
}
