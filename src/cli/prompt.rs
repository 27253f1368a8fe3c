//! Interactive credential prompt
//!
//! The prober asks for the cookie on stdin rather than reading it from the
//! environment. Generic over reader/writer so tests can drive it.

use crate::cli::Result;
use crate::http::Credential;
use std::io::{BufRead, Write};

/// Print `prompt`, read one line and wrap it as a credential
///
/// Returns `Ok(None)` for an empty line or end of input.
pub fn prompt_credential<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<Credential>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(Credential::new(line.trim()))
}
