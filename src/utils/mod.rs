//! Various utility modules.

pub mod base16;

pub(crate) mod config;
