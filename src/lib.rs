#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! A URL normalizer that decodes HTML entities and percent-encoding
//! without changing what the URL means.
//!
//! Percent-encoded octets are decoded component by component. Within each
//! component, octets whose decoding would alter the structure of the URL
//! are left encoded: `%2F` stays `%2F` in a path segment, and `%26` and `%3D`
//! stay encoded in a query so that key-value pairs are not corrupted.
//! Cascaded encodings such as `%2541` are resolved level by level until
//! nothing changes.
//!
//! | Component   | Kept encoded                          |
//! |-------------|---------------------------------------|
//! | scheme      | not decoded at all                    |
//! | user, pass  | `%3A %40 %2F %3F %23 %25`             |
//! | host        | nothing                               |
//! | path        | `%2F %3F %23 %3D %25`                 |
//! | query       | `%26 %3D %23 %3A %2F %3F %25 %2B`     |
//! | fragment    | `%2F %3F %23 %3D %25`                 |
//!
//! In the query alone, a double-encoded `&` or `=` (`%2526`, `%253D`) is
//! also kept as is.
//!
//! # Examples
//!
//! ```
//! assert_eq!(
//!     url_canon::normalize("http://ex%61mple.com/a%2Fb?q=a&amp;b=%2541"),
//!     "http://example.com/a%2Fb?q=a&b=A"
//! );
//! assert_eq!(
//!     url_canon::normalize("http%3A%2F%2Fexample.com%2Fpath"),
//!     "http://example.com/path"
//! );
//! ```
//!
//! Use [`Normalizer`] to change the defaults.
//!
//! # Feature flags
//!
//! - `serde`: Implements [`Serialize`] for [`Parts`].
//!
//! [`Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//!
//! # Logging
//!
//! Events are emitted through the [`log`] facade: a `debug` event when a URL
//! cannot be split and is decoded in full, a `trace` event when an encoded
//! scheme is recovered, and a `warn` event when decoding hits the pass limit.

extern crate alloc;

pub mod component;
mod error;
mod fmt;
pub mod normalize;
mod parser;
mod parts;
pub mod pct_enc;

pub use error::{ParseError, ParseErrorKind};
pub use normalize::Normalizer;
pub use parts::Parts;

use alloc::string::String;

/// Normalizes a URL with the default [`Normalizer`].
///
/// This never fails: input that cannot be split into components is
/// decoded in full instead.
///
/// # Examples
///
/// ```
/// use url_canon::normalize;
///
/// assert_eq!(normalize("http://example.com/a%2Fb"), "http://example.com/a%2Fb");
/// assert_eq!(normalize("http://x.com/?a%3Db%26c=d"), "http://x.com/?a%3Db%26c=d");
/// assert_eq!(normalize("http://example.com/?q=a&amp;b=2"), "http://example.com/?q=a&b=2");
/// ```
#[must_use]
pub fn normalize(url: &str) -> String {
    Normalizer::new().normalize(url)
}

/// Normalizes a URL given as bytes with the default [`Normalizer`].
///
/// Invalid UTF-8 sequences are replaced with
/// [`U+FFFD REPLACEMENT CHARACTER`][U+FFFD] first.
///
/// [U+FFFD]: char::REPLACEMENT_CHARACTER
#[must_use]
pub fn normalize_bytes(url: &[u8]) -> String {
    Normalizer::new().normalize_bytes(url)
}
