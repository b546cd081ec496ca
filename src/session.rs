//! Session credential loading

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::SessionError;
use crate::utils::debug_log;

/// Read the session token from the first line of `path`, trimmed.
///
/// The token is opaque: an empty first line yields an empty string.
pub(crate) fn load_session(path: &Path) -> Result<String, SessionError> {
    let file = File::open(path).map_err(|e| read_error(path, e))?;

    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| read_error(path, e))?;

    debug_log!("loaded session from {} ({} chars)", path.display(), line.trim().len());
    Ok(line.trim().to_string())
}

fn read_error(path: &Path, source: std::io::Error) -> SessionError {
    if source.kind() == ErrorKind::NotFound {
        SessionError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        SessionError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}
