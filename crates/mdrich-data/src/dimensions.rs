//! Parsing of `LxWxH` dimension strings.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DataError;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Three integer dimensions, in the order they were written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions([u32; 3]);

impl Dimensions {
    pub const fn new(length: u32, width: u32, height: u32) -> Self {
        Self([length, width, height])
    }

    /// Parse the first three digit runs of a string.
    ///
    /// Any separator works (`×`, `x`, `*`, spaces, units), so
    /// `"41×137×51 mm"` and `"41 137 51"` parse the same. Fewer than three
    /// numbers, or a number too large for `u32`, yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut runs = DIGIT_RUN.find_iter(s).map(|m| m.as_str().parse::<u32>());
        let mut next = || runs.next()?.ok();
        Some(Self([next()?, next()?, next()?]))
    }

    /// Dimensions in written order.
    pub const fn as_array(self) -> [u32; 3] {
        self.0
    }

    /// Dimensions sorted ascending, ignoring orientation.
    pub fn sorted(self) -> [u32; 3] {
        let mut dims = self.0;
        dims.sort_unstable();
        dims
    }
}

impl FromStr for Dimensions {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DataError::UnparseableDimensions(s.to_string()))
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [l, w, h] = self.0;
        write!(f, "{}x{}x{}", l, w, h)
    }
}

/// Parse a dimension string into `[L, W, H]`.
pub fn parse_dimensions(s: &str) -> Option<[u32; 3]> {
    Dimensions::parse(s).map(Dimensions::as_array)
}
