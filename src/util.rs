//! Crate-wide result type and top-level error exit.

/// Custom result type for error handling throughout the program.
pub type Result<T> = anyhow::Result<T>;

/// Logs the provided error and exits the program.
///
/// # Arguments
///
/// * `err` - The error to log before exiting.
pub fn handle_error_and_exit(err: anyhow::Error) -> ! {
    log::error!("{:#}", err);
    std::process::exit(1);
}
