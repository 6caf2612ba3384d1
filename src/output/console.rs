//! Reporter for local runs outside a CI host

use crate::output::traits::{ReportResult, Reporter};
use std::io::{self, Stderr, Stdout, Write};

/// Writes output values to one stream and failures to another
pub struct ConsoleReporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl ConsoleReporter<Stdout, Stderr> {
    /// Reporter on the process's stdout and stderr
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Consumes the reporter, returning its streams
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Reporter for ConsoleReporter<O, E> {
    fn set_output(&mut self, _name: &str, value: &str) -> ReportResult<()> {
        writeln!(self.out, "{}", value)?;
        self.out.flush()?;
        Ok(())
    }

    fn set_failed(&mut self, message: &str) -> ReportResult<()> {
        writeln!(self.err, "error: {}", message)?;
        self.err.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_goes_to_out_stream() {
        let mut reporter = ConsoleReporter::new(Vec::new(), Vec::new());
        reporter.set_output("job-config", "[]").unwrap();

        let (out, err) = reporter.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_failure_goes_to_err_stream() {
        let mut reporter = ConsoleReporter::new(Vec::new(), Vec::new());
        reporter.set_failed("Version argument is required").unwrap();

        let (out, err) = reporter.into_inner();
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "error: Version argument is required\n"
        );
    }
}
