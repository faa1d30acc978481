use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};

/// Starts file logging under `logs/`, mirroring everything to stdout and warnings to stderr.
///
/// The returned handle must be kept alive for the duration of the program.
pub fn setup_logging(base_level: &str) -> anyhow::Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(base_level)?
        .log_to_file(FileSpec::default().directory("logs"))
        .duplicate_to_stderr(Duplicate::Warn)
        .duplicate_to_stdout(Duplicate::All)
        .rotate(
            Criterion::Size(1024 * 1024), //1MB
            Naming::Timestamps,
            Cleanup::KeepLogFiles(5),
        )
        .start()?;

    Ok(handle)
}
