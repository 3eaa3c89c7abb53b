use std::fs::File;
use std::io::Write;
use std::path::Path;

use rand::Rng;

use super::math;
use crate::Error;

/// Writes `length` random lowercase letters and a newline to `dir/<prefix><suffix>`,
/// replacing any existing content, then echoes the content to `out`.
///
/// The file handle is closed before the echo and on every error path.
pub fn write_outfile<R: Rng, W: Write>(
    rng: &mut R,
    dir: &Path,
    prefix: &str,
    suffix: &str,
    length: usize,
    out: &mut W,
) -> Result<String, Error> {
    let name = format!("{}{}", prefix, suffix);
    let path = dir.join(&name);

    let content = {
        let mut file = File::create(&path).map_err(|e| {
            Error::File(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let content = math::random_string(rng, length) + "\n";
        file.write_all(content.as_bytes()).map_err(|e| {
            Error::File(format!("Failed to write file {}: {}", path.display(), e))
        })?;
        content
    };
    log::debug!("Wrote {} bytes to {}", content.len(), path.display());

    writeln!(out, "contents of file {}: {}", name, content)
        .map_err(|e| Error::Output(format!("Failed to print contents of {}: {}", name, e)))?;
    Ok(content)
}
