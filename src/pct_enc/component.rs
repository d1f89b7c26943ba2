#![allow(missing_debug_implementations)]

//! Decoding rules for URL components.

use super::table::{self, Table};

/// A trait used by [`EStr`] to specify how a component is decoded.
///
/// [`EStr`]: super::EStr
///
/// # Examples
///
/// A component that keeps encoded slashes only:
///
/// ```
/// use url_canon::pct_enc::{component::Component, EStr, Table};
///
/// struct Segment;
///
/// impl Component for Segment {
///     const RESERVED: Table = Table::new(b"/");
/// }
///
/// let s = EStr::<Segment>::new("a%2Fb%3Fc");
/// assert_eq!(s.decode_preserving(), "a%2Fb?c");
/// ```
pub trait Component: 'static {
    /// Octets whose percent-encoded form is never decoded.
    const RESERVED: Table;

    /// Octets `XY` for which a double-encoded `%25XY` is kept as is
    /// instead of being decoded one level to `%XY`.
    const PRESERVE_DOUBLE: Table = Table::EMPTY;
}

/// Decoding rules for the user and password.
pub struct Userinfo(());

impl Component for Userinfo {
    const RESERVED: Table = table::USERINFO;
}

/// Decoding rules for the host.
pub struct Host(());

impl Component for Host {
    const RESERVED: Table = table::HOST;
}

/// Decoding rules for the path.
pub struct Path(());

impl Component for Path {
    const RESERVED: Table = table::PATH;
}

/// Decoding rules for the query.
///
/// This is the only component that guards against double-encoded
/// `&` and `=` collapsing into their encoded form.
pub struct Query(());

impl Component for Query {
    const RESERVED: Table = table::QUERY;
    const PRESERVE_DOUBLE: Table = table::QUERY_DOUBLE;
}

/// Decoding rules for the fragment.
pub struct Fragment(());

impl Component for Fragment {
    const RESERVED: Table = table::FRAGMENT;
}
