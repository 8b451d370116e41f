use crate::config::cli::CliConfig;
use crate::core::classifier::classify_range;
use crate::core::report::render;
use crate::utils::error::Result;
use std::io::Write;

/// Resolves the configuration, classifies the range and writes the rendered table to `out`.
pub fn run<W: Write>(cli: &CliConfig, out: &mut W) -> Result<()> {
    let resolved = cli.resolve()?;

    tracing::info!(
        "Classifying {}..={} as {}",
        resolved.start,
        resolved.end,
        resolved.format
    );

    let table = classify_range(resolved.range());
    let output = render(&table, resolved.format)?;
    out.write_all(output.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{ErrorCategory, ParityError};
    use clap::Parser;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_writes_table() {
        let cli = CliConfig::parse_from(["parity-check", "--start", "0", "--end", "1"]);
        let mut out = Vec::new();
        run(&cli, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("0 is Even\n1 is Odd\n"));
    }

    #[test]
    fn test_closed_stdout_is_output_error() {
        let cli = CliConfig::parse_from(["parity-check", "--start", "0", "--end", "999"]);
        let err = run(&cli, &mut ClosedPipe).unwrap_err();
        assert!(matches!(err, ParityError::IoError(_)));
        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_config_error_writes_nothing() {
        let cli = CliConfig::parse_from(["parity-check", "--start", "5", "--end", "1"]);
        let mut out = Vec::new();
        let err = run(&cli, &mut out).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(out.is_empty());
    }
}
