//! Read-eval-print loop over any line source.

use super::{Assistant, Reply, FAREWELL, GREETING, PROMPT};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Greet, then answer lines from `input` until an exit command or end of input.
pub fn run_repl<R, W>(assistant: &mut Assistant, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            info!("input closed");
            writeln!(output)?;
            writeln!(output, "{}", FAREWELL)?;
            break;
        };

        let reply = assistant.handle_line(&line?);
        if !reply.text().is_empty() {
            writeln!(output, "{}", reply.text())?;
        }
        if let Reply::Exit(_) = reply {
            break;
        }
    }

    output.flush()
}
