use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Write `message`, then read one line from `input`.
///
/// Only the line terminator is stripped; spaces the player typed are kept.
/// Running out of input before a line arrives is an error.
pub fn read_line_prompt<R, W>(input: &mut R, output: &mut W, message: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", message).context("Failed to write prompt")?;
    output.flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        anyhow::bail!("Unexpected end of input while waiting for '{}'", message.trim_end());
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
