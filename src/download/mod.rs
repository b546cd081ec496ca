//! Puzzle input download
//!
//! The HTTP layer sits behind the [`Fetcher`] trait so the streaming and
//! file handling can be exercised without a network.

mod client;

use std::fs;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::consts::DOWNLOAD_CHUNK_SIZE;
use crate::error::DownloadError;
use crate::utils::debug_log;

pub(crate) use client::UreqFetcher;

/// Issues the authenticated GET for a puzzle input
pub(crate) trait Fetcher {
    /// Request `url` with the `session` cookie attached.
    ///
    /// Returns the response body only for a 2xx status.
    fn fetch(&self, url: &str, session: &str) -> Result<Box<dyn Read>, DownloadError>;
}

/// Download `url` into `output`, returning the number of bytes written.
///
/// The body is streamed into a temporary file next to `output` and renamed
/// over it once complete, so a failed download never leaves a partial file
/// and never touches an existing one.
pub(crate) fn download_input(
    fetcher: &dyn Fetcher,
    url: &str,
    session: &str,
    output: &Path,
) -> Result<u64, DownloadError> {
    debug_log!("GET {url}");
    let mut body = fetcher.fetch(url, session)?;

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|source| DownloadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut part = new_part_file(dir).map_err(|source| DownloadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    debug_log!("streaming into {}", part.path().display());

    let written = copy_chunks(&mut body, part.as_file_mut(), output)?;

    // An overwritten input keeps its mode
    if let Ok(existing) = fs::metadata(output) {
        part.as_file()
            .set_permissions(existing.permissions())
            .map_err(|source| DownloadError::Io {
                path: output.to_path_buf(),
                source,
            })?;
    }

    part.persist(output).map_err(|e| DownloadError::Io {
        path: output.to_path_buf(),
        source: e.error,
    })?;
    debug_log!("wrote {written} bytes to {}", output.display());

    Ok(written)
}

/// Temp file in `dir` created with the mode a plain `File::create` would get
fn new_part_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

fn copy_chunks(
    body: &mut dyn Read,
    file: &mut fs::File,
    output: &Path,
) -> Result<u64, DownloadError> {
    let mut buf = vec![0u8; DOWNLOAD_CHUNK_SIZE];
    let mut written = 0u64;

    loop {
        let n = match body.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(DownloadError::Request(e.to_string())),
        };
        file.write_all(&buf[..n]).map_err(|source| DownloadError::Io {
            path: output.to_path_buf(),
            source,
        })?;
        written += n as u64;
    }

    file.flush().map_err(|source| DownloadError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(written)
}
