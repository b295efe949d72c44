use ring::rand::{SecureRandom, SystemRandom};
use std::fs::{self, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CHUNK_SIZE: u64 = 8192;

#[derive(Debug, Error)]
#[error("failed to shred {}: {source}", path.display())]
pub struct ShredError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl ShredError {
    fn new(path: &Path, source: io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Overwrite `path` with random data in fixed-size chunks, truncate it to
/// zero length, and remove it.
///
/// Callers treat any error here as fatal: a partially shredded file is an
/// ambiguous credential-leak state.
pub fn shred(path: &Path) -> Result<(), ShredError> {
    let err = |e: io::Error| ShredError::new(path, e);

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(err)?;
    let len = file.metadata().map_err(err)?.len();

    let rng = SystemRandom::new();
    let mut buffer = [0u8; CHUNK_SIZE as usize];
    let mut offset = 0u64;
    while offset < len {
        rng.fill(&mut buffer)
            .map_err(|_| err(io::Error::other("random source failure")))?;
        file.seek(SeekFrom::Start(offset)).map_err(err)?;
        // The final chunk may extend past EOF; the truncate below discards it.
        file.write_all(&buffer).map_err(err)?;
        offset += CHUNK_SIZE;
    }
    file.sync_all().map_err(err)?;

    file.set_len(0).map_err(err)?;
    drop(file);

    fs::remove_file(path).map_err(err)
}
