//! GitHub Actions reporter
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT` using the
//! multi-line `name<<DELIMITER` form. Without that variable the legacy
//! `::set-output` workflow command is written to stdout instead. Failures are
//! reported with the `::error::` workflow command.

use crate::output::traits::{ReportError, ReportResult, Reporter};
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::PathBuf;

/// Environment variable naming the step's output file
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Reporter speaking the GitHub Actions workflow protocol
pub struct GithubActionsReporter<W: Write> {
    output_file: Option<PathBuf>,
    out: W,
}

impl GithubActionsReporter<Stdout> {
    /// Reporter configured from the process environment
    pub fn from_env() -> Self {
        let output_file = std::env::var_os(GITHUB_OUTPUT_ENV)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        Self::new(output_file, io::stdout())
    }
}

impl<W: Write> GithubActionsReporter<W> {
    pub fn new(output_file: Option<PathBuf>, out: W) -> Self {
        Self { output_file, out }
    }

    /// Consumes the reporter, returning its command stream
    pub fn into_inner(self) -> W {
        self.out
    }

    fn issue_command(&mut self, command: &str, properties: &str, message: &str) -> ReportResult<()> {
        let properties = if properties.is_empty() {
            String::new()
        } else {
            format!(" {}", properties)
        };
        writeln!(
            self.out,
            "::{}{}::{}",
            command,
            properties,
            escape_data(message)
        )?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Reporter for GithubActionsReporter<W> {
    fn set_output(&mut self, name: &str, value: &str) -> ReportResult<()> {
        match &self.output_file {
            Some(path) => {
                let entry = file_command_entry(name, value)?;
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(entry.as_bytes())?;
                Ok(())
            }
            None => self.issue_command(
                "set-output",
                &format!("name={}", escape_property(name)),
                value,
            ),
        }
    }

    fn set_failed(&mut self, message: &str) -> ReportResult<()> {
        self.issue_command("error", "", message)
    }
}

/// Formats a `name<<DELIMITER` block for the output file
fn file_command_entry(name: &str, value: &str) -> ReportResult<String> {
    let digest = hex::encode(Sha256::digest(value.as_bytes()));
    let delimiter = format!("ghadelimiter_{}", &digest[..16]);

    if name.contains(&delimiter) || value.contains(&delimiter) {
        return Err(ReportError::Write(format!(
            "output '{}' contains the delimiter {}",
            name, delimiter
        )));
    }

    Ok(format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter))
}

/// Escapes a workflow command message
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escapes a workflow command property value
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
