use std::time::Duration;

/// Event year used when neither the CLI nor the config file names one
pub(crate) const DEFAULT_YEAR: u16 = 2024;

/// Where the puzzle inputs live
pub(crate) const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Credential file, relative to the working directory
pub(crate) const DEFAULT_SESSION_FILE: &str = "session.id";

/// Directory the downloaded inputs are written to
pub(crate) const DEFAULT_INPUT_DIR: &str = "./input/";

pub(crate) const FIRST_DAY: i64 = 1;
pub(crate) const LAST_DAY: i64 = 25;

pub(crate) const DOWNLOAD_CHUNK_SIZE: usize = 8192;
pub(crate) const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
);
