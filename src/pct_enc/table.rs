//! Tables of percent-encoded octets that must survive decoding.
//!
//! Each URL component has its own table. A percent-encoded triplet `%XY`
//! is *reserved* in a component when the octet `0xXY` is allowed by the
//! component's table, and reserved triplets are never decoded. Matching is
//! done on the octet value, so `%2f` and `%2F` are treated alike.

/// A set of ASCII octets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table(u64, u64);

impl Table {
    /// A table that allows no octet.
    pub const EMPTY: Self = Self(0, 0);

    /// Creates a table that only allows the given octets.
    ///
    /// # Panics
    ///
    /// Panics if any of the octets is not ASCII.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(cur.is_ascii(), "cannot allow non-ASCII octet");
            table |= 1u128.wrapping_shl(*cur as u32);
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the octets allowed
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Subtracts from this table.
    ///
    /// Returns a new table that allows all the octets allowed
    /// by `self` but not allowed by `other`.
    #[must_use]
    pub const fn sub(self, other: Self) -> Self {
        Self(self.0 & !other.0, self.1 & !other.1)
    }

    /// Checks whether the table is a subset of another, i.e., `other`
    /// allows at least all the octets allowed by `self`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0 && self.1 & other.1 == self.1
    }

    /// Checks whether the table allows no octet.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0 && self.1 == 0
    }

    /// Checks whether the given octet is allowed by the table.
    #[inline]
    #[must_use]
    pub const fn allows(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0
        } else if x < 128 {
            self.1
        } else {
            0
        };
        table & 1u64.wrapping_shl(x as u32) != 0
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

/// Octets kept encoded in the user and password: `: @ / ? # %`.
pub const USERINFO: Table = new(b":@/?#%");

/// Octets kept encoded in the host: none, the host is decoded in full.
pub const HOST: Table = Table::EMPTY;

/// Octets kept encoded in the path: `/ ? # = %`.
pub const PATH: Table = new(b"/?#=%");

/// Octets kept encoded in the query: `& = # : / ? % +`.
pub const QUERY: Table = new(b"&=#:/?%+");

/// Octets `XY` for which `%25XY` is kept as is in the query: `& =`.
pub const QUERY_DOUBLE: Table = new(b"&=");

/// Octets kept encoded in the fragment, same as [`PATH`].
pub const FRAGMENT: Table = PATH;
