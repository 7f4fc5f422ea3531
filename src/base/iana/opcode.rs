//! DNS OpCodes.

//------------ Opcode --------------------------------------------------------

int_enum! {
    /// DNS OpCodes.
    ///
    /// The opcode specifies the kind of query to be performed. It is a four
    /// bit value in the message header.
    ///
    /// Only the values defined in [RFC 1035] are supported when parsing
    /// messages. Later additions such as NOTIFY or UPDATE can still be
    /// represented but will be rejected by the header.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    =>
    Opcode, u8;

    /// A standard query (0).
    (QUERY => 0, "QUERY")

    /// An inverse query (1, obsolete).
    ///
    /// Inverse queries were optional, never widely supported and have been
    /// declared obsolete by [RFC 3425].
    ///
    /// [RFC 3425]: https://tools.ietf.org/html/rfc3425
    (IQUERY => 1, "IQUERY")

    /// A server status request (2).
    (STATUS => 2, "STATUS")
}

int_enum_str_with_prefix!(Opcode, "OPCODE", b"OPCODE", u8, "unknown opcode");

impl Opcode {
    /// The largest value that fits into the header field.
    pub const MAX: Opcode = Opcode(0x0F);

    /// Returns whether this opcode is one of those defined by RFC 1035.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        self.0 <= 2
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn supported() {
        assert!(Opcode::QUERY.is_supported());
        assert!(Opcode::IQUERY.is_supported());
        assert!(Opcode::STATUS.is_supported());
        assert!(!Opcode::from_int(3).is_supported());
        assert!(!Opcode::MAX.is_supported());
    }

    #[cfg(feature = "std")]
    #[test]
    fn from_str_and_display() {
        use core::str::FromStr;

        assert_eq!(Opcode::from_str("query").unwrap(), Opcode::QUERY);
        assert_eq!(Opcode::from_str("OPCODE2").unwrap(), Opcode::STATUS);
        assert!(Opcode::from_str("NOTIFY").is_err());
        assert_eq!(format!("{}", Opcode::from_int(5)), "OPCODE5");
        assert_eq!(format!("{:?}", Opcode::IQUERY), "Opcode::IQUERY");
    }
}
