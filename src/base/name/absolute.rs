//! Uncompressed, absolute domain names.
//!
//! This is a private module. Its public types are re-exported by the parent.

use super::label::{Label, LabelError};
use alloc::vec::Vec;
use core::str::FromStr;
use core::{fmt, slice};
use octseq::builder::{infallible, OctetsBuilder};

//------------ Name ----------------------------------------------------------

/// An absolute domain name.
///
/// The type keeps the labels of the name in order with the root label
/// implied at the end. The root name itself has no labels at all.
///
/// Values can only be created with a wire format length of at most 255
/// octets, counting each label’s length octet and the final root label.
/// Because every [`Label`] is valid, too, any name can be composed without
/// further checks.
///
/// You can construct a domain name from a string via the [`FromStr`] trait
/// or from its labels via [`try_new`][Self::try_new]. In addition, you can
/// parse it from a message via [`parse`][Self::parse].
///
/// Comparison and hashing ignore ASCII case, just as for labels.
#[derive(Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Name {
    labels: Vec<Label>,
}

/// # Creating Values
///
impl Name {
    /// Domain names have a maximum length of 255 octets.
    pub const MAX_LEN: usize = 255;

    /// Returns the root name.
    #[must_use]
    pub fn root() -> Self {
        Name { labels: Vec::new() }
    }

    /// Creates a name from a sequence of labels.
    ///
    /// The labels are given in wire order, i.e., the most specific label
    /// first. The root label must not be included.
    pub fn try_new(
        labels: impl IntoIterator<Item = Label>,
    ) -> Result<Self, NameError> {
        let labels: Vec<_> = labels.into_iter().collect();
        if wire_len(&labels) > Self::MAX_LEN {
            return Err(NameError::LongName);
        }
        Ok(Name { labels })
    }

    /// Creates a name from labels already known to fit.
    pub(super) fn from_labels_unchecked(labels: Vec<Label>) -> Self {
        Name { labels }
    }
}

/// Returns the wire format length of a name made of `labels`.
fn wire_len(labels: &[Label]) -> usize {
    labels
        .iter()
        .map(|label| usize::from(label.compose_len()))
        .sum::<usize>()
        + 1
}

/// # Properties
///
impl Name {
    /// Returns the labels of the name without the root label.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns an iterator over the labels without the root label.
    pub fn iter(&self) -> slice::Iter<'_, Label> {
        self.labels.iter()
    }

    /// Returns the number of labels without the root label.
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns whether the name is the root name.
    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the length of the uncompressed wire format.
    pub fn compose_len(&self) -> u16 {
        // A name is at most 255 octets long.
        wire_len(&self.labels) as u16
    }
}

/// # Composing
///
impl Name {
    /// Appends the uncompressed wire format of the name to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        for label in &self.labels {
            label.compose(target)?;
        }
        target.append_slice(&[0])
    }

    /// Returns the uncompressed wire format of the name.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.compose_len().into());
        infallible(self.compose(&mut res));
        res
    }
}

//--- FromStr

impl FromStr for Name {
    type Err = NameError;

    /// Parses a string into an absolute domain name.
    ///
    /// The name needs to be given as a sequence of labels separated by
    /// dots. A final dot is optional. A single dot is the root name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "." {
            return Ok(Self::root());
        }
        let s = s.strip_suffix('.').unwrap_or(s);
        let labels = s
            .split('.')
            .map(Label::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_new(labels)
    }
}

//--- IntoIterator

impl<'a> IntoIterator for &'a Name {
    type Item = &'a Label;
    type IntoIter = slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//--- Display and Debug

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for label in &self.labels {
            write!(f, "{}.", label)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({})", self)
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for Name {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Name {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        crate::base::serde::deserialize_from_str(deserializer)
    }
}

//------------ NameError -----------------------------------------------------

/// A domain name could not be created.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// One of the labels was not acceptable.
    BadLabel(LabelError),

    /// The name is longer than the 255 octets allowed.
    LongName,
}

impl From<LabelError> for NameError {
    fn from(err: LabelError) -> Self {
        NameError::BadLabel(err)
    }
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            NameError::BadLabel(ref err) => err.fmt(f),
            NameError::LongName => f.write_str("long domain name"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NameError {}

//============ Testing =======================================================
