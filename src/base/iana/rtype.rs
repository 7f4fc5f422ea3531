//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource records has a 16 bit type value indicating what kind of
    /// information is represented by the record. Normal query includes the
    /// type of record information is requested for. A few additional types,
    /// called query types, are defined as well and can only be used in
    /// questions.
    ///
    /// The types here are those defined in [RFC 1035]. The record data of
    /// all other types is treated as opaque octets.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// A mail destination.
    ///
    /// (Obsolete – use MX)
    (MD => 3, "MD")

    /// A mail forwarder.
    ///
    /// (Obsolete – use MX)
    (MF => 4, "MF")

    /// The canonical name for an alias
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A mailbox domain name.
    ///
    /// (Experimental.)
    (MB => 7, "MB")

    /// A mail group member
    ///
    /// (Experimental.)
    (MG => 8, "MG")

    /// A mail rename domain name.
    ///
    /// (Experimental.)
    (MR => 9, "MR")

    /// A null resource record.
    ///
    /// (Experimental.)
    (NULL => 10, "NULL")

    /// A well known service description.
    (WKS => 11, "WKS")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Host information.
    (HINFO => 13, "HINFO")

    /// Mailbox or mail list information.
    (MINFO => 14, "MINFO")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// An IPv6 host address.
    ///
    /// Defined in [RFC 3596]. It is not a valid question type here but
    /// appears in the answers of many real world messages.
    ///
    /// [RFC 3596]: https://tools.ietf.org/html/rfc3596
    (AAAA => 28, "AAAA")

    /// Transfer of an entire zone.
    (AXFR => 252, "AXFR")

    /// Mailbox-related records (MB, MG, or MR).
    (MAILB => 253, "MAILB")

    /// Mail agent RRs.
    ///
    /// (Obsolete – see MX)
    (MAILA => 254, "MAILA")

    /// A request for all records the server/cache has available.
    (ANY => 255, "ANY")
}

int_enum_str_with_prefix!(Rtype, "TYPE", b"TYPE", u16, "unknown record type");

impl Rtype {
    /// Returns whether the type may appear in the question section.
    ///
    /// These are the regular types A through TXT plus the query types
    /// AXFR, MAILB, MAILA, and ANY.
    #[must_use]
    pub const fn is_valid_qtype(self) -> bool {
        matches!(self.0, 1..=16 | 252..=255)
    }

    /// Returns whether the record data of this type may contain domain
    /// names.
    ///
    /// Such names may be compressed, so the record data can only be
    /// reproduced correctly within the message it was taken from.
    #[must_use]
    pub fn may_embed_names(self) -> bool {
        matches!(
            self,
            Rtype::NS
                | Rtype::MD
                | Rtype::MF
                | Rtype::CNAME
                | Rtype::SOA
                | Rtype::MB
                | Rtype::MG
                | Rtype::MR
                | Rtype::PTR
                | Rtype::MINFO
                | Rtype::MX
        )
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn qtype() {
        for value in 1..=16 {
            assert!(Rtype::from_int(value).is_valid_qtype());
        }
        for value in 252..=255 {
            assert!(Rtype::from_int(value).is_valid_qtype());
        }
        assert!(!Rtype::from_int(0).is_valid_qtype());
        assert!(!Rtype::AAAA.is_valid_qtype());
        assert!(!Rtype::from_int(251).is_valid_qtype());
        assert!(!Rtype::from_int(256).is_valid_qtype());
    }

    #[test]
    fn embedded_names() {
        assert!(Rtype::CNAME.may_embed_names());
        assert!(Rtype::MX.may_embed_names());
        assert!(!Rtype::A.may_embed_names());
        assert!(!Rtype::TXT.may_embed_names());
        assert!(!Rtype::AAAA.may_embed_names());
    }

    #[cfg(feature = "std")]
    #[test]
    fn from_str_and_display() {
        use core::str::FromStr;

        assert_eq!(Rtype::from_str("cname").unwrap(), Rtype::CNAME);
        assert_eq!(Rtype::from_str("TYPE28").unwrap(), Rtype::AAAA);
        assert_eq!(format!("{}", Rtype::from_int(99)), "TYPE99");
        assert_eq!(format!("{}", Rtype::MAILB), "MAILB");
    }
}
