use std::path::Path;

use crate::prelude::*;

/// Reads the key file once, see [`KeyList::from_lines`] for the format.
///
/// Keys are not validated here, a malformed key only fails once it is used
/// to sign.
pub fn load_keys(path: impl AsRef<Path>) -> Result<KeyList> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| Error::LoadKeys {
        path: path.to_path_buf(),
        underlying: e.to_string(),
    })?;
    let keys = KeyList::from_lines(&contents);
    if keys.is_empty() {
        warn!("No keys found in {}", path.display());
    } else {
        info!("Loaded {} keys from {}", keys.len(), path.display());
    }
    Ok(keys)
}
