//! Line-by-line decoding loop
//!
//! Reads NMEA sentences from the input, one per line, and writes a
//! JSON record for every completed AIS message. Lines that fail to
//! decode are logged and skipped; the loop only stops on end of
//! input or an I/O error.

use std::io;

use anyhow::Context;
use log::{debug, info, warn};

use aivdm::{render_json, AisDecoder};

use crate::cli::Args;

/// Run the decoding loop
///
/// Consumes `input` to exhaustion, printing each completed message
/// to `output`. Comment lines (leading `#`) and blank lines are
/// skipped without comment.
pub fn run<R, W>(args: &Args, input: R, mut output: W) -> Result<(), anyhow::Error>
where
    R: io::BufRead,
    W: io::Write,
{
    let mut decoder = AisDecoder::new();
    let mut lineno = 0u64;
    let mut decoded = 0u64;
    let mut failed = 0u64;

    for line in input.lines() {
        let line = line.context("unable to read input")?;
        lineno += 1;

        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match decoder.decode(line) {
            Ok(Some(msg)) => {
                decoded += 1;
                output
                    .write_all(render_json(&msg, args.device.as_deref(), args.scaled).as_bytes())
                    .context("unable to write output")?;
            }
            Ok(None) => {
                debug!("line {lineno}: fragment held for reassembly");
            }
            Err(err) => {
                failed += 1;
                warn!("line {lineno}: {err}");
            }
        }
    }

    output.flush().context("unable to write output")?;
    info!("{decoded} message(s) decoded, {failed} line(s) rejected");
    Ok(())
}
