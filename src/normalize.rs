//! Module for normalization.

use crate::{
    parts::Parts,
    pct_enc::{self, EStr, DEFAULT_MAX_PASSES},
};
use alloc::{
    borrow::Cow,
    string::{String, ToString},
};

/// Characters stripped from both ends of the input, as by PHP's `trim`.
const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// A configurable URL normalizer.
///
/// See [`normalize`](Self::normalize) for what normalization does.
#[derive(Clone, Copy, Debug)]
#[must_use]
pub struct Normalizer {
    decode_html_entities: bool,
    recover_encoded_scheme: bool,
    max_passes: usize,
}

impl Normalizer {
    /// Creates a new `Normalizer` with default configuration.
    pub const fn new() -> Self {
        Self {
            decode_html_entities: true,
            recover_encoded_scheme: true,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Sets whether to decode HTML entities such as `&amp;` before parsing.
    ///
    /// This defaults to `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_canon::Normalizer;
    ///
    /// let url = "http://example.com/?a=1&amp;b=2";
    /// assert_eq!(Normalizer::new().normalize(url), "http://example.com/?a=1&b=2");
    ///
    /// let normalizer = Normalizer::new().decode_html_entities(false);
    /// assert_eq!(normalizer.normalize(url), url);
    /// ```
    pub fn decode_html_entities(mut self, value: bool) -> Self {
        self.decode_html_entities = value;
        self
    }

    /// Sets whether to retry parsing on the fully decoded string when
    /// the scheme itself appears to be percent-encoded.
    ///
    /// This defaults to `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_canon::Normalizer;
    ///
    /// let url = "https%3A%2F%2Fexample.com%2Fa%252Fb";
    /// assert_eq!(Normalizer::new().normalize(url), "https://example.com/a%2Fb");
    ///
    /// let normalizer = Normalizer::new().recover_encoded_scheme(false);
    /// assert_eq!(normalizer.normalize(url), "https:%2F%2Fexample.com%2Fa%2Fb");
    /// ```
    pub fn recover_encoded_scheme(mut self, value: bool) -> Self {
        self.recover_encoded_scheme = value;
        self
    }

    /// Sets the maximum number of decoding passes over a single component.
    ///
    /// Every pass resolves one more level of percent-encoding. This defaults
    /// to [`DEFAULT_MAX_PASSES`], and a value of zero is treated as one.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_canon::Normalizer;
    ///
    /// let url = "http://example.com/%252541";
    /// assert_eq!(Normalizer::new().normalize(url), "http://example.com/A");
    /// assert_eq!(Normalizer::new().max_passes(1).normalize(url), "http://example.com/%2541");
    /// ```
    pub fn max_passes(mut self, value: usize) -> Self {
        self.max_passes = value;
        self
    }

    /// Normalizes the given URL.
    ///
    /// The input is trimmed and its HTML entities are decoded. It is then
    /// split into components with [`Parts::parse`], and each component is
    /// decoded with [`EStr::decode_preserving`]: percent-encoded octets are
    /// decoded until nothing changes, except those that would alter the
    /// structure of the URL, such as `%2F` in the path or `%26` in the query.
    /// The host is decoded in full and the scheme is left as is.
    ///
    /// If the string cannot be split, every percent-encoded octet in it is
    /// decoded with [`decode_lossless`](pct_enc::decode_lossless) instead.
    ///
    /// This method never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_canon::Normalizer;
    ///
    /// let normalizer = Normalizer::new();
    /// assert_eq!(
    ///     normalizer.normalize("http://ex%61mple.com/a%2Fb%20c?x=%26&y=%41#top"),
    ///     "http://example.com/a%2Fb c?x=%26&y=A#top"
    /// );
    /// ```
    #[must_use]
    pub fn normalize(&self, url: &str) -> String {
        let url = url.trim_matches(TRIMMED);
        let decoded = if self.decode_html_entities {
            html_escape::decode_html_entities(url)
        } else {
            Cow::Borrowed(url)
        };

        let recovered;
        let mut parts = match Parts::parse(&decoded) {
            Ok(parts) => parts,
            Err(e) => {
                log::debug!("falling back to full decoding of {decoded:?}: {e}");
                return pct_enc::decode_lossless(&decoded).into_owned();
            }
        };

        if self.recover_encoded_scheme
            && parts.scheme().is_none()
            && !parts.path().is_empty()
            && pct_enc::has_pct_encoded(&decoded)
        {
            recovered = pct_enc::decode_lossless(&decoded);
            if let Ok(reparsed) = Parts::parse(&recovered) {
                if let Some(scheme) = reparsed.scheme() {
                    log::trace!("recovered encoded scheme {scheme:?} in {decoded:?}");
                    parts = reparsed;
                }
            }
        }

        self.assemble(&parts, decoded.len())
    }

    /// Normalizes the given bytes as a URL.
    ///
    /// Invalid UTF-8 sequences are replaced with
    /// [`U+FFFD REPLACEMENT CHARACTER`][U+FFFD] before normalization.
    ///
    /// [U+FFFD]: char::REPLACEMENT_CHARACTER
    ///
    /// # Examples
    ///
    /// ```
    /// use url_canon::Normalizer;
    ///
    /// let s = Normalizer::new().normalize_bytes(b"/a%41\xff%");
    /// assert_eq!(s, "/aA\u{FFFD}%");
    /// ```
    #[must_use]
    pub fn normalize_bytes(&self, url: &[u8]) -> String {
        self.normalize(&String::from_utf8_lossy(url))
    }

    fn assemble(&self, parts: &Parts<'_>, capacity: usize) -> String {
        let mut buf = String::with_capacity(capacity);
        let path = self.decode(parts.path());

        if let Some(scheme) = parts.scheme() {
            buf.push_str(scheme.as_str());
            if parts.has_authority() || path.starts_with('/') {
                buf.push_str("://");
            } else {
                buf.push(':');
            }
        } else if parts.has_authority() {
            buf.push_str("//");
        }

        if let Some(auth) = parts.authority() {
            if let Some(user) = auth.user() {
                buf.push_str(&self.decode(user));
                if let Some(password) = auth.password() {
                    buf.push(':');
                    buf.push_str(&self.decode(password));
                }
                buf.push('@');
            }

            buf.push_str(&self.decode(auth.host()));

            if let Some(port) = auth.port() {
                buf.push(':');
                buf.push_str(&port.to_string());
            }
        }

        buf.push_str(&path);

        if let Some(query) = parts.query() {
            buf.push('?');
            buf.push_str(&self.decode(query));
        }

        if let Some(fragment) = parts.fragment() {
            buf.push('#');
            buf.push_str(&self.decode(fragment));
        }

        buf
    }

    fn decode<'a, C: pct_enc::component::Component>(&self, s: &'a EStr<C>) -> Cow<'a, str> {
        s.decode_preserving_with(self.max_passes)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
