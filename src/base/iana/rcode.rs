//! DNS response codes.

//------------ Rcode ---------------------------------------------------------

int_enum! {
    /// DNS response codes.
    ///
    /// The response code of a response indicates what happened on the server
    /// when trying to answer the query. The code is a four bit value in the
    /// message header.
    ///
    /// The values zero through five are defined in [RFC 1035]. Values six
    /// through fifteen are reserved there and will be rejected when parsing
    /// a header.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    =>
    Rcode, u8;

    /// No error condition.
    (NOERROR => 0, "NOERROR")

    /// Format error.
    ///
    /// The name server was unable to interpret the query.
    (FORMERR => 1, "FORMERR")

    /// Server failure.
    ///
    /// The name server was unable to process this query due to a problem
    /// with the name server.
    (SERVFAIL => 2, "SERVFAIL")

    /// Name error.
    ///
    /// The domain name given in the query does not exist at the name
    /// server. Only meaningful in responses from an authoritative server.
    (NXDOMAIN => 3, "NXDOMAIN")

    /// Not implemented.
    ///
    /// The name server does not support the requested kind of query.
    (NOTIMP => 4, "NOTIMP")

    /// Query refused.
    ///
    /// The name server refuses to perform the operation requested by the
    /// query for policy reasons.
    (REFUSED => 5, "REFUSED")
}

int_enum_str_with_prefix!(Rcode, "RCODE", b"RCODE", u8, "unknown rcode");

impl Rcode {
    /// The largest value that fits into the header field.
    pub const MAX: Rcode = Rcode(0x0F);

    /// Returns whether this rcode is one of those defined by RFC 1035.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        self.0 <= 5
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn supported() {
        assert!(Rcode::NOERROR.is_supported());
        assert!(Rcode::REFUSED.is_supported());
        assert!(!Rcode::from_int(6).is_supported());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Configure, Token};

        assert_tokens(&Rcode::NXDOMAIN.readable(), &[Token::Str("NXDOMAIN")]);
        assert_tokens(&Rcode(9).readable(), &[Token::Str("RCODE9")]);
        assert_tokens(&Rcode::NXDOMAIN.compact(), &[Token::U8(3)]);
    }
}
