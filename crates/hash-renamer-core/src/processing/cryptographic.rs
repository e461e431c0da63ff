//! Computes the hex digest of a file's contents.
//!
//! Files are read in fixed-size chunks so memory use does not depend on
//! file size. The digest depends only on the bytes, never on the name or
//! metadata of the file.
use crate::error::Result;
use crate::processing::CHUNK_SIZE;
use crate::types::HashAlgorithm;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use std::{fs::File, io::Read, path::Path};

/// Compute the full lowercase hex digest of a file
pub fn compute_digest<P: AsRef<Path>>(path: P, algorithm: HashAlgorithm) -> Result<String> {
    let file = File::open(&path)?;

    let digest = match algorithm {
        HashAlgorithm::Md5 => stream_digest::<Md5, _>(file)?,
        HashAlgorithm::Sha1 => stream_digest::<Sha1, _>(file)?,
        HashAlgorithm::Sha224 => stream_digest::<Sha224, _>(file)?,
        HashAlgorithm::Sha256 => stream_digest::<Sha256, _>(file)?,
        HashAlgorithm::Sha384 => stream_digest::<Sha384, _>(file)?,
        HashAlgorithm::Sha512 => stream_digest::<Sha512, _>(file)?,
        HashAlgorithm::Blake3 => stream_blake3(file)?,
    };

    Ok(digest)
}

/// First `length` characters of a digest, or the whole digest if shorter
pub fn short_digest(digest: &str, length: usize) -> &str {
    // Hex digests are ASCII, so byte slicing is safe
    &digest[..length.min(digest.len())]
}

fn stream_digest<D: Digest, R: Read>(mut reader: R) -> Result<String> {
    let mut hasher = D::new();

    let mut buffer = [0; CHUNK_SIZE];
    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

fn stream_blake3<R: Read>(mut reader: R) -> Result<String> {
    let mut hasher = blake3::Hasher::new();

    let mut buffer = [0; CHUNK_SIZE];
    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize().to_hex().to_string())
}
