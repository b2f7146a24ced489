use std::fmt::Display;

/// Byte order of a single access
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Endianness {
    /// most significant byte first,
    /// used when the caller does not ask for little endian
    Big,
    /// least significant byte first
    Little,
}

impl Endianness {

    pub fn from_little_endian_flag(little_endian: bool) -> Endianness {
        if little_endian {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    pub fn reversed(self) -> Endianness {
        match self {
            Endianness::Big => Endianness::Little,
            Endianness::Little => Endianness::Big,
        }
    }
}

impl Default for Endianness {
    fn default() -> Self {
        Endianness::Big
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::endianness::Endianness;

    #[test]
    fn big_endian_unless_flagged() {
        assert_eq!(Endianness::default(), Endianness::Big);
        assert_eq!(Endianness::from_little_endian_flag(false), Endianness::Big);
        assert_eq!(Endianness::from_little_endian_flag(true), Endianness::Little);
        assert_eq!(Endianness::Little.reversed(), Endianness::Big);
        assert_eq!(Endianness::Big.to_string(), "Big");
    }
}
