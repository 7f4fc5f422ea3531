//! Configuration for parsing messages.
//!
//! The [`ParseConfig`] type controls two aspects of parsing: how many
//! compression pointers a single domain name may contain and whether data
//! trailing the last record of a message is rejected.

use crate::utils::config::DefMinMax;

//------------ Configuration Constants ---------------------------------------

/// Limits for the number of compression pointers within a single name.
///
/// With the default of one, a name may consist of labels followed by a
/// single pointer to the remainder of the name. Every pointer has to point
/// to an earlier position than the one before, so even the maximum can’t
/// lead to loops.
const MAX_POINTER_HOPS: DefMinMax<usize> = DefMinMax::new(1, 1, 16);

//------------ ParseConfig ---------------------------------------------------

/// Configuration for parsing DNS data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParseConfig {
    /// Maximum number of compression pointers followed in a single name.
    max_pointer_hops: usize,

    /// Whether to ignore data after the last record of a message.
    allow_trailing_data: bool,
}

impl ParseConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the maximum number of compression pointers per name.
    ///
    /// Encountering more pointers than this while parsing a domain name
    /// results in an error of kind
    /// [`RecursivePointer`][super::wire::ErrorKind::RecursivePointer].
    pub fn max_pointer_hops(&self) -> usize {
        self.max_pointer_hops
    }

    /// Sets the maximum number of compression pointers per name.
    ///
    /// If this value is too small or too large, it will be caped.
    pub fn set_max_pointer_hops(&mut self, value: usize) {
        self.max_pointer_hops = MAX_POINTER_HOPS.limit(value)
    }

    /// Returns whether data after the last record of a message is accepted.
    pub fn allow_trailing_data(&self) -> bool {
        self.allow_trailing_data
    }

    /// Sets whether data after the last record of a message is accepted.
    ///
    /// By default, octets that follow the last record counted in the
    /// header are ignored. If this is `false`, they are treated as a
    /// mismatch between the section counts of the header and the actual
    /// content of the message.
    pub fn set_allow_trailing_data(&mut self, value: bool) {
        self.allow_trailing_data = value
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_pointer_hops: MAX_POINTER_HOPS.default(),
            allow_trailing_data: true,
        }
    }
}

//============ Testing =======================================================
