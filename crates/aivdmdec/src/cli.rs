use std::fmt::Display;

use clap::{error::ErrorKind, CommandFactory, Parser};

/// Standard input filename
const STDIN_FILE: &str = "-";

const USAGE_SHORT: &str = r#"
This program accepts NMEA 0183 !AIVDM / !AIVDO sentences, one per line, and decodes the AIS messages they carry. Each completed message is printed as a single JSON record.

See --help for more details.
"#;

const USAGE_LONG: &str = r##"
This program accepts NMEA 0183 !AIVDM / !AIVDO sentences, one per line, and decodes the AIS messages they carry. Each completed message is printed as a single JSON record, terminated with CR LF.

You can pipe in a live feed from a receiver

    nc 153.44.253.27 5631 | aivdmdec

or replay a capture file

    aivdmdec --file capture.nmea

Blank lines and lines starting with "#" are ignored. Lines that fail to decode are reported on stderr and skipped; decoding always continues with the next line.

By default the records carry the raw integer field values from the air interface. With --scaled, positions, speeds, and other measured quantities are converted to conventional units (degrees, knots, and so on):

    {"class":"AIS","type":1,"repeat":0,"mmsi":477550900,"scaled":true,"status":0,"status_text":"Under way using engine","turn":1,"speed":11.8,...}

Sentence checksums are NOT verified: many receivers and relays rewrite or omit them.
"##;

/// Top-level program arguments
#[derive(Parser, Clone, Debug)]
#[command(version)]
#[command(about, long_about = None)]
#[command(after_help = USAGE_SHORT, after_long_help = USAGE_LONG)]
#[command(max_term_width = 100)]
pub struct Args {
    /// Verbosity level (-vvv for more)
    #[arg(short, long, default_value_t = 0, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print decoded records ONLY; suppress all logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Convert fields to conventional units
    ///
    /// Positions become degrees, speeds become knots, courses and
    /// headings become degrees true. Without this flag, records carry
    /// the raw integer values from the air interface.
    #[arg(short, long)]
    pub scaled: bool,

    /// Label records with a receiver name
    ///
    /// The name is emitted as a "device" field in every record. Useful
    /// when merging output from several receivers.
    #[arg(short, long)]
    pub device: Option<String>,

    /// Input file (or "-" for stdin)
    ///
    /// The input must be text with one NMEA sentence per line.
    #[arg(long, default_value_t = STDIN_FILE.to_string())]
    pub file: String,
}

impl Args {
    /// Return true if the user requests input from stdin
    pub fn input_is_stdin(&self) -> bool {
        self.file == STDIN_FILE
    }
}

/// A program-level error with exit code
#[derive(Debug)]
pub struct CliError {
    error: anyhow::Error,
    exit_code: i32,
}

impl CliError {
    /// Create new error with a custom exit code
    pub fn new(error: anyhow::Error, code: i32) -> CliError {
        CliError {
            error,
            exit_code: code,
        }
    }

    /// Print this error to the terminal
    ///
    /// Errors from clap are printed verbatim. Other types of errors
    /// are printed indirectly via clap's fancy formatter.
    pub fn print(&self) -> std::io::Result<()> {
        if let Some(e) = self.error.downcast_ref::<clap::Error>() {
            e.print()
        } else {
            Args::command()
                .error(ErrorKind::Format, self.to_string())
                .print()
        }
    }

    /// Print this error to the terminal and exit
    pub fn exit(&self) -> ! {
        drop(self.print());
        std::process::exit(self.exit_code);
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.error)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> CliError {
        CliError::new(err, 1)
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> CliError {
        let code = if err.use_stderr() { 1 } else { 0 };
        CliError::new(err.into(), code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clap() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
