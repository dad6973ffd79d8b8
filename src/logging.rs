use flexi_logger::{
    colored_default_format, opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger,
    LoggerHandle, Naming,
};

/// Start the global logger.
///
/// `level` is used unless `RUST_LOG` is set. Logs go to stderr, or to
/// rotating files in `log_dir` when one is given. Keep the returned handle
/// alive for as long as logging is needed.
pub fn setup_logging(level: &str, log_dir: Option<&str>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(level)?;
    match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .format(opt_format)
            .rotate(
                Criterion::Size(10 * 1024 * 1024), // 10 MB per file
                Naming::Numbers,
                Cleanup::KeepLogFiles(1),
            )
            .start(),
        None => logger.format(colored_default_format).start(),
    }
}
