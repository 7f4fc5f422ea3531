//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for
    /// different network types. In practice, only the IN class is really
    /// relevant.
    ///
    /// In addition, there is the query class ANY (or `*`) that can only be
    /// used in questions.
    ///
    /// See [RFC 1035] for the classes used here and the
    /// [DNS CLASSes IANA registry] for an overview of assigned values.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [DNS CLASSes IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-2
    =>
    Class, u16;

    /// Internet (IN).
    (IN => 1, "IN")

    /// CSNET (CS, obsolete).
    (CS => 2, "CS")

    /// Chaosnet (CH).
    (CH => 3, "CH")

    /// Hesiod (HS).
    (HS => 4, "HS")

    /// Query class * (ANY).
    (ANY => 0xFF, "*")
}

int_enum_str_with_prefix!(Class, "CLASS", b"CLASS", u16, "unknown class");

impl Class {
    /// Returns whether the class may appear in the question section.
    ///
    /// These are IN, CH, HS, and ANY. The obsolete CS class is not
    /// accepted.
    #[must_use]
    pub const fn is_valid_qclass(self) -> bool {
        matches!(self.0, 1 | 3 | 4 | 0xFF)
    }
}

//============ Tests =========================================================
