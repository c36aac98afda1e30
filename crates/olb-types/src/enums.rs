/// Text rotation, packed into two bits of a display property's style word.
///
/// Only four orientations exist on the wire, so the mapping is total —
/// there is no invalid rotation value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Decode the low two bits of `raw`.
    pub fn from_wire(raw: u8) -> Self {
        match raw & 0b11 {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    pub fn wire(self) -> u8 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    /// Rotation in degrees, counter-clockwise.
    pub fn degrees(self) -> u16 {
        u16::from(self.wire()) * 90
    }
}

/// Drawing color.
///
/// The low palette entries match the classic 8-color table in every
/// sample checked so far; higher values occur (picked from a larger
/// user palette) and are preserved raw rather than guessed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
    Other(u16),
}

impl Color {
    pub fn from_wire(raw: u16) -> Self {
        match raw {
            0 => Self::Black,
            1 => Self::Blue,
            2 => Self::Green,
            3 => Self::Cyan,
            4 => Self::Red,
            5 => Self::Magenta,
            6 => Self::Yellow,
            7 => Self::White,
            other => Self::Other(other),
        }
    }

    pub fn wire(self) -> u16 {
        match self {
            Self::Black => 0,
            Self::Blue => 1,
            Self::Green => 2,
            Self::Cyan => 3,
            Self::Red => 4,
            Self::Magenta => 5,
            Self::Yellow => 6,
            Self::White => 7,
            Self::Other(raw) => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_is_total_over_two_bits() {
        assert_eq!(Rotation::from_wire(0), Rotation::Deg0);
        assert_eq!(Rotation::from_wire(1), Rotation::Deg90);
        assert_eq!(Rotation::from_wire(2), Rotation::Deg180);
        assert_eq!(Rotation::from_wire(3), Rotation::Deg270);
        // Upper bits are the caller's problem; the mapping masks them off.
        assert_eq!(Rotation::from_wire(0b111), Rotation::Deg270);
    }

    #[test]
    fn rotation_degrees() {
        assert_eq!(Rotation::Deg0.degrees(), 0);
        assert_eq!(Rotation::Deg270.degrees(), 270);
    }

    #[test]
    fn named_colors_roundtrip() {
        for raw in 0..=7 {
            let color = Color::from_wire(raw);
            assert!(!matches!(color, Color::Other(_)));
            assert_eq!(color.wire(), raw);
        }
    }

    #[test]
    fn palette_values_preserved_raw() {
        let color = Color::from_wire(0x30);
        assert_eq!(color, Color::Other(0x30));
        assert_eq!(color.wire(), 0x30);
    }
}
