//! Percent-encoding utilities.

pub mod component;
mod preserve;
pub mod table;

pub use table::Table;

use alloc::{borrow::Cow, string::String};
use component::Component;
use core::{cmp::Ordering, hash, marker::PhantomData, str};
use percent_encoding::percent_decode_str;
use ref_cast::{ref_cast_custom, RefCastCustom};

/// The default upper bound on decoding passes over a single component.
pub const DEFAULT_MAX_PASSES: usize = 32;

/// Percent-encoded component slices.
///
/// # Type parameter
///
/// The `EStr<C>` type is parameterized over a type `C` that implements
/// [`Component`]. Unlike a strict URI parser, any string is accepted:
/// a `%` that does not start a valid triplet is simply a literal `%`.
/// The component type only decides which triplets are kept encoded
/// when the slice is [decoded](Self::decode_preserving).
///
/// # Comparison
///
/// `EStr` slices are compared [lexicographically](Ord#lexicographical-comparison)
/// by their byte values. Decoding is **not** performed prior to comparison.
///
/// # Examples
///
/// ```
/// use url_canon::pct_enc::{component::{Path, Query}, EStr};
///
/// assert_eq!(EStr::<Path>::new("/a%2Fb%20c").decode_preserving(), "/a%2Fb c");
/// assert_eq!(EStr::<Query>::new("k=a%26b%20c").decode_preserving(), "k=a%26b c");
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct EStr<C: Component> {
    component: PhantomData<C>,
    inner: str,
}

impl<C: Component> EStr<C> {
    /// Converts a string slice to an `EStr` slice.
    #[ref_cast_custom]
    pub const fn new(s: &str) -> &Self;

    /// An empty `EStr` slice.
    pub const EMPTY: &'static Self = Self::new("");

    /// Yields the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the length of the `EStr` slice in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks whether the `EStr` slice is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Checks whether the `EStr` slice contains any valid percent-encoded triplet.
    #[must_use]
    pub fn has_pct_encoded(&self) -> bool {
        has_pct_encoded(&self.inner)
    }

    /// Decodes every percent-encoded triplet that is not reserved in `C`,
    /// repeatedly, until the result no longer changes.
    ///
    /// Reserved triplets are copied verbatim, keeping their hex case.
    /// Decoded bytes that do not form valid UTF-8 are re-encoded as
    /// uppercase triplets.
    ///
    /// This method allocates only when something is decoded. At most
    /// [`DEFAULT_MAX_PASSES`] passes are made; see
    /// [`decode_preserving_with`](Self::decode_preserving_with).
    ///
    /// # Examples
    ///
    /// ```
    /// use url_canon::pct_enc::{component::{Path, Query}, EStr};
    ///
    /// // Cascaded encoding is resolved.
    /// assert_eq!(EStr::<Path>::new("%252541").decode_preserving(), "A");
    ///
    /// // A double-encoded `&` in the query is left alone ...
    /// assert_eq!(EStr::<Query>::new("a=%2526").decode_preserving(), "a=%2526");
    /// // ... whereas the path has no such guard.
    /// assert_eq!(EStr::<Path>::new("a%2526").decode_preserving(), "a&");
    /// ```
    #[must_use]
    pub fn decode_preserving(&self) -> Cow<'_, str> {
        self.decode_preserving_with(DEFAULT_MAX_PASSES)
    }

    /// Like [`decode_preserving`](Self::decode_preserving), but makes
    /// at most `max_passes` passes. A value of zero is treated as one.
    #[must_use]
    pub fn decode_preserving_with(&self, max_passes: usize) -> Cow<'_, str> {
        preserve::decode(&self.inner, C::RESERVED, C::PRESERVE_DOUBLE, max_passes)
    }
}

impl<C: Component> AsRef<str> for EStr<C> {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl<C: Component> PartialEq for EStr<C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C: Component> PartialEq<str> for EStr<C> {
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl<C: Component> PartialEq<EStr<C>> for str {
    fn eq(&self, other: &EStr<C>) -> bool {
        self == &other.inner
    }
}

impl<C: Component> Eq for EStr<C> {}

impl<C: Component> hash::Hash for EStr<C> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<C: Component> PartialOrd for EStr<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Component> Ord for EStr<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl<C: Component> Default for &EStr<C> {
    /// Creates an empty `EStr` slice.
    fn default() -> Self {
        EStr::EMPTY
    }
}

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes the two hex digits at `bytes[i..i + 2]`, if there are any.
#[inline]
pub(crate) fn hexdig_pair_at(bytes: &[u8], i: usize) -> Option<u8> {
    match bytes.get(i..i + 2) {
        Some(&[hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
            Some(OCTET_TABLE_HI[hi as usize] | OCTET_TABLE_LO[lo as usize])
        }
        _ => None,
    }
}

/// Decodes the percent-encoded triplet at `bytes[i..i + 3]`, if there is one.
#[inline]
pub(crate) fn triplet_at(bytes: &[u8], i: usize) -> Option<u8> {
    if bytes.get(i) == Some(&b'%') {
        hexdig_pair_at(bytes, i + 1)
    } else {
        None
    }
}

pub(crate) fn has_pct_encoded(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes
        .iter()
        .enumerate()
        .any(|(i, &x)| x == b'%' && hexdig_pair_at(bytes, i + 1).is_some())
}

pub(crate) fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

/// Appends decoded bytes to `buf`, re-encoding any byte that is not part of
/// a valid UTF-8 sequence.
pub(crate) fn push_decoded(buf: &mut String, bytes: &[u8]) {
    for chunk in bytes.utf8_chunks() {
        buf.push_str(chunk.valid());
        for &x in chunk.invalid() {
            buf.push_str(encode_byte(x));
        }
    }
}

/// Decodes every valid percent-encoded triplet in a string, regardless
/// of its meaning in a URL.
///
/// A `%` that does not start a valid triplet is kept as a literal `%`.
/// Decoded bytes that do not form valid UTF-8 are re-encoded as uppercase
/// triplets, so the output is lossless.
///
/// This function allocates only when the string contains any valid triplet.
///
/// # Examples
///
/// ```
/// use url_canon::pct_enc::decode_lossless;
///
/// assert_eq!(decode_lossless("a%2Fb%zz"), "a/b%zz");
/// assert_eq!(decode_lossless("%C3%A9%ff"), "é%FF");
/// ```
#[must_use]
pub fn decode_lossless(s: &str) -> Cow<'_, str> {
    match Cow::from(percent_decode_str(s)) {
        Cow::Borrowed(_) => Cow::Borrowed(s),
        Cow::Owned(bytes) => match String::from_utf8(bytes) {
            Ok(decoded) => Cow::Owned(decoded),
            Err(e) => {
                let bytes = e.into_bytes();
                let mut buf = String::with_capacity(bytes.len());
                push_decoded(&mut buf, &bytes);
                Cow::Owned(buf)
            }
        },
    }
}
