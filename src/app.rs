use crate::cli::Cli;
use crate::download::{Fetcher, download_input};
use crate::error::AppError;
use crate::puzzle::Day;
use crate::session::load_session;
use crate::utils::debug_log;

/// Validate the day, load the session and download the input.
///
/// The range check and the session lookup both happen before any request,
/// so an invalid invocation never touches the network or the input dir.
pub(crate) fn run(cli: &Cli, fetcher: &dyn Fetcher) -> Result<(), AppError> {
    let day = Day::parse(&cli.number)?;
    let url = day.input_url(cli.base_url(), cli.year());
    let output = day.output_path(&cli.input_dir());

    let session_file = cli.session_file();
    let session = load_session(&session_file)?;
    debug_log!("day {day} of {} -> {}", cli.year(), output.display());

    let bytes = download_input(fetcher, &url, &session, &output)?;
    println!(
        "Downloaded day {} input to {} ({} bytes)",
        day,
        output.display(),
        bytes
    );
    Ok(())
}
