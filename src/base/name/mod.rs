//! Domain names.
//!
//! Domain names are a sequence of *labels*. In their wire-format
//! representation labels are prefixed with an octet containing the number
//! of octets in the label. The labels in a domain name are nominally
//! arranged backwards. That is, the ‘most significant’ label is the last
//! one. Every name in a message is *absolute* and ends in the empty *root
//! label*.
//!
//! In order to save space in DNS messages (which were originally limited to
//! 512 bytes for most cases), a name can end in a pointer to another name
//! stored elsewhere in the message. [`Name::parse`] follows these pointers
//! and collects the labels into an owned [`Name`]. How many pointers it is
//! prepared to follow is determined by the
//! [`ParseConfig`][crate::base::config::ParseConfig] it is given.
//!
//! Names are always composed without compression.

pub use self::absolute::{Name, NameError};
pub use self::label::{Label, LabelError, LabelType};

mod absolute;
mod label;
mod parsed;
