//! Character encoding detection and transcoding.
//!
//! Job descriptions arrive as pasted text or uploaded files with no charset
//! declaration. Detection relies on the byte-order mark, then on UTF-8
//! validity, and finally assumes windows-1252, the usual encoding of text
//! exported from legacy office tools.

use std::io::Read;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::error::Result;

/// Detect the character encoding of raw text bytes.
///
/// Looks at, in order:
/// 1. A UTF-8, UTF-16LE or UTF-16BE byte-order mark
/// 2. Whether the bytes are valid UTF-8
/// 3. Defaults to windows-1252 otherwise
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }

    WINDOWS_1252
}

/// Transcode text bytes to a UTF-8 string.
///
/// Detects the encoding and converts to UTF-8. A byte-order mark is
/// stripped. Conversion is lossy: undecodable sequences become `�`.
///
/// # Examples
///
/// ```
/// use jd_extract::encoding::transcode_to_utf8;
///
/// let text = b"Caf\xE9 Manager";
/// assert_eq!(transcode_to_utf8(text), "Café Manager");
/// ```
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);

    // decode() sniffs and strips a BOM itself; replacement characters are
    // substituted rather than reported.
    let (decoded, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::debug!(encoding = used.name(), "input contained undecodable bytes");
    }
    decoded.into_owned()
}

/// Read all of `reader` and transcode it to a UTF-8 string.
///
/// # Errors
///
/// Returns `Error::Io` if reading fails.
pub fn read_to_utf8<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(transcode_to_utf8(&bytes))
}
