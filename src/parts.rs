use crate::{
    component::{Authority, Scheme},
    error::ParseError,
    parser,
    pct_enc::{
        component::{Fragment, Path, Query},
        EStr,
    },
};

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// A URL split into its components, borrowed from the input string.
///
/// Splitting is permissive: relative references, scheme-only strings
/// and strings that are not URLs at all are accepted. See
/// [`parse`](Self::parse) for the rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Parts<'a> {
    pub(crate) scheme: Option<&'a Scheme>,
    pub(crate) authority: Option<Authority<'a>>,
    pub(crate) path: &'a EStr<Path>,
    pub(crate) query: Option<&'a EStr<Query>>,
    pub(crate) fragment: Option<&'a EStr<Fragment>>,
}

impl<'a> Parts<'a> {
    /// Splits a string into URL components.
    ///
    /// The rules follow those of PHP's `parse_url`:
    ///
    /// - The text before the first colon is a scheme if it is non-empty and
    ///   consists of letters, digits, `+`, `-` and `.` only, unless the colon
    ///   is followed by one to five digits and then a slash or the end, in
    ///   which case the string is read as `host:port`.
    /// - `file:///` introduces an absolute path, not an empty authority.
    /// - The authority ends at the first `/`, `?` or `#`. Its userinfo ends at
    ///   the last `@` and is split into user and password at the first colon.
    /// - The fragment starts at the first `#`, the query at the first `?`
    ///   before it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an authority is present with an empty host, or with
    /// a port that is not a number in `0..=65535`.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_canon::Parts;
    ///
    /// let parts = Parts::parse("https://user@example.com:8042/over/there?name=ferret#nose")?;
    /// assert_eq!(parts.scheme().unwrap().as_str(), "https");
    /// let auth = parts.authority().unwrap();
    /// assert_eq!(auth.host(), "example.com");
    /// assert_eq!(auth.port(), Some(8042));
    /// assert_eq!(parts.path(), "/over/there");
    /// assert_eq!(parts.query().unwrap(), "name=ferret");
    /// assert_eq!(parts.fragment().unwrap(), "nose");
    ///
    /// let parts = Parts::parse("localhost:8080/status")?;
    /// assert!(parts.scheme().is_none());
    /// assert_eq!(parts.authority().unwrap().host(), "localhost");
    /// # Ok::<_, url_canon::ParseError>(())
    /// ```
    pub fn parse(s: &'a str) -> Result<Self, ParseError> {
        parser::parse(s)
    }

    /// Returns the scheme component.
    #[must_use]
    pub fn scheme(&self) -> Option<&'a Scheme> {
        self.scheme
    }

    /// Returns the authority component.
    #[must_use]
    pub fn authority(&self) -> Option<Authority<'a>> {
        self.authority
    }

    /// Checks whether an authority component is present.
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.authority.is_some()
    }

    /// Returns the path component, which may be empty.
    #[must_use]
    pub fn path(&self) -> &'a EStr<Path> {
        self.path
    }

    /// Returns the query component.
    ///
    /// An empty query (`"a?"`) is distinguished from an absent one (`"a"`).
    #[must_use]
    pub fn query(&self) -> Option<&'a EStr<Query>> {
        self.query
    }

    /// Returns the fragment component.
    ///
    /// An empty fragment (`"a#"`) is distinguished from an absent one (`"a"`).
    #[must_use]
    pub fn fragment(&self) -> Option<&'a EStr<Fragment>> {
        self.fragment
    }
}

#[cfg(feature = "serde")]
impl Serialize for Parts<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let auth = self.authority;
        let mut state = serializer.serialize_struct("Parts", 8)?;
        state.serialize_field("scheme", &self.scheme.map(Scheme::as_str))?;
        state.serialize_field("user", &auth.and_then(|a| a.user).map(EStr::as_str))?;
        state.serialize_field(
            "password",
            &auth.and_then(|a| a.password).map(EStr::as_str),
        )?;
        state.serialize_field("host", &auth.map(|a| a.host.as_str()))?;
        state.serialize_field("port", &auth.and_then(|a| a.port))?;
        state.serialize_field("path", self.path.as_str())?;
        state.serialize_field("query", &self.query.map(EStr::as_str))?;
        state.serialize_field("fragment", &self.fragment.map(EStr::as_str))?;
        state.end()
    }
}
