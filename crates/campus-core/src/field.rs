//! Checks for text that ends up in a `|`-separated data file.
//!
//! Every data file stores one record per line with `|` between fields and no
//! quoting, so a field holding `|`, `\n` or `\r` would split into extra
//! fields or lines and be dropped as malformed on the next load.  Writers and
//! the assistant call [`check_field`] before anything is stored.

use crate::{CampusError, CampusResult};

/// Separator between fields on every data-file line.
pub const FIELD_SEPARATOR: char = '|';

/// Characters no stored field may contain.
pub const RESERVED: [char; 3] = [FIELD_SEPARATOR, '\n', '\r'];

/// Reject `value` if it contains a [`RESERVED`] character or any of `extra`.
///
/// `field` names the field in the error, e.g. `"title"` or `"station"`.
pub fn check_field(field: &'static str, value: &str, extra: &[char]) -> CampusResult<()> {
    match value.chars().find(|c| RESERVED.contains(c) || extra.contains(c)) {
        None => Ok(()),
        Some(found) => Err(CampusError::UnstorableField {
            field,
            value: value.to_owned(),
            found,
        }),
    }
}

/// Like [`check_field`], and also reject the empty string.
pub fn check_name(field: &'static str, value: &str, extra: &[char]) -> CampusResult<()> {
    if value.is_empty() {
        return Err(CampusError::EmptyField { field });
    }
    check_field(field, value, extra)
}
