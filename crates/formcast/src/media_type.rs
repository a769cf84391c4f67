// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Media-type syntax check used for registry keys.
//!
//! Accepts `type/subtype` with optional `; name=value` parameters, where
//! type and subtype are RFC 6838 restricted names and parameter values are
//! tokens or quoted strings (RFC 9110).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MEDIA_TYPE_RE: Regex = Regex::new(concat!(
        r"^[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]{0,126}",
        r"/[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]{0,126}",
        r#"(?:[ \t]*;[ \t]*[A-Za-z0-9!#$%&'*+.^_`|~-]+=(?:[A-Za-z0-9!#$%&'*+.^_`|~-]+|"(?:[^"\\]|\\.)*"))*$"#,
    ))
    .unwrap();
}

/// Returns true if `value` is a syntactically valid media type.
///
/// ```rust
/// use formcast::is_media_type;
///
/// assert!(is_media_type("application/x-www-form-urlencoded"));
/// assert!(is_media_type("multipart/form-data; boundary=xyz"));
/// assert!(!is_media_type("not a media type"));
/// ```
pub fn is_media_type(value: &str) -> bool {
    MEDIA_TYPE_RE.is_match(value)
}
