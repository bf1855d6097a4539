use encoding_rs::{Encoding, GB18030};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// Read a text file exported by the monitoring network.
///
/// A byte order mark selects the encoding. Without one the content is taken as
/// UTF-8 and, if that fails, decoded as GB18030 (a superset of GBK).
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_text(&bytes, path))
}

fn decode_text(bytes: &[u8], path: &Path) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return text.into_owned();
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            debug!(path = %path.display(), "Not valid UTF-8, decoding as GB18030");
            let (text, had_errors) = GB18030.decode_without_bom_handling(bytes);
            if had_errors {
                debug!(path = %path.display(), "Replacement characters inserted while decoding");
            }
            text.into_owned()
        }
    }
}
