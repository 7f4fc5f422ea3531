//! Encoding of Base 16 a.k.a. hex digits.
//!
//! The Base 16 encoding is defined in [RFC 4648]. Record data of unknown
//! types is presented in this encoding as described in [RFC 3597].
//!
//! [RFC 3597]: https://tools.ietf.org/html/rfc3597
//! [RFC 4648]: https://tools.ietf.org/html/rfc4648

use core::fmt;

/// Encodes binary data in Base 16 and writes it into a format stream.
///
/// This function is intended to be used in implementations of formatting
/// traits:
///
/// ```
/// use core::fmt;
/// use domain_wire::utils::base16;
///
/// struct Foo<'a>(&'a [u8]);
///
/// impl<'a> fmt::Display for Foo<'a> {
///     fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
///         base16::display(&self.0, f)
///     }
/// }
///
/// assert_eq!(format!("{}", Foo(b"\x0a\xff")), "0AFF");
/// ```
pub fn display<Octets, Target>(octets: &Octets, f: &mut Target) -> fmt::Result
where
    Octets: AsRef<[u8]> + ?Sized,
    Target: fmt::Write,
{
    for &octet in octets.as_ref() {
        write!(f, "{:02X}", octet)?;
    }
    Ok(())
}

//============ Test ==========================================================
