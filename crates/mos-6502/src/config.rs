//! CPU variant selection.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Which member of the 6502 family to emulate.
///
/// The variants share the NMOS microcode, undocumented opcodes included.
/// They differ only in whether the D flag affects ADC and SBC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Stock NMOS 6502 (also 6510, 8500) with BCD arithmetic.
    #[default]
    Nmos6502,
    /// Ricoh 2A03/2A07 as used in the NES. D can be set but is ignored.
    Ricoh2A03,
}

impl Variant {
    /// Whether ADC/SBC honour the D flag.
    #[must_use]
    pub const fn has_decimal_mode(self) -> bool {
        matches!(self, Self::Nmos6502)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nmos6502 => f.write_str("6502"),
            Self::Ricoh2A03 => f.write_str("2a03"),
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "6502" | "nmos" | "nmos6502" | "6510" | "8500" => Ok(Self::Nmos6502),
            "2a03" | "2a07" | "ricoh" | "ricoh2a03" => Ok(Self::Ricoh2A03),
            _ => Err(Error::UnknownVariant(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_through_display() {
        for variant in [Variant::Nmos6502, Variant::Ricoh2A03] {
            assert_eq!(variant.to_string().parse::<Variant>().ok(), Some(variant));
        }
        assert_eq!("NMOS".parse::<Variant>().ok(), Some(Variant::Nmos6502));
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let err = "65c02".parse::<Variant>().unwrap_err();
        assert!(matches!(err, Error::UnknownVariant(ref name) if name == "65c02"));
        assert_eq!(err.to_string(), "unknown CPU variant: 65c02");
    }

    #[test]
    fn decimal_mode_support() {
        assert!(Variant::default().has_decimal_mode());
        assert!(!Variant::Ricoh2A03.has_decimal_mode());
    }
}
