//! CRC32 framing for store log lines
//!
//! A framed line is `<crc32 as 8 lowercase hex digits> <body>\n`, the
//! checksum taken over the body bytes only.

use crc32fast::Hasher;

/// Computes a CRC32 (IEEE) checksum over the provided data.
pub fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Prefixes `body` with its checksum and terminates the line
pub fn frame_line(body: &str) -> String {
    format!("{:08x} {}\n", compute_checksum(body.as_bytes()), body)
}

/// Returns the body of a framed line (without its newline), or the reason
/// the frame is invalid.
pub fn unframe_line(line: &str) -> Result<&str, &'static str> {
    let (checksum, body) = line.split_once(' ').ok_or("missing checksum separator")?;

    if checksum.len() != 8 {
        return Err("malformed checksum");
    }
    let expected = u32::from_str_radix(checksum, 16).map_err(|_| "malformed checksum")?;

    if compute_checksum(body.as_bytes()) != expected {
        return Err("checksum mismatch");
    }
    Ok(body)
}
