//! Byte and word order patterns for multi-register values
//!
//! Devices disagree on how a 32/64-bit quantity is spread over consecutive
//! 16-bit registers. Patterns are named with byte labels in transmission
//! order: for registers `[0x1234, 0x5678]` the bytes are
//! A=`0x12`, B=`0x34`, C=`0x56`, D=`0x78` (each register is sent high byte
//! first). The 64-bit patterns extend the scheme to A..H over 4 registers.
//!
//! Every pattern reduces to one [`WordLayout`]: pick a source register for
//! each destination slot, optionally swap the bytes inside each register,
//! serialise big-endian, then optionally reverse the whole byte sequence.

/// Reordering rule over `N` registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordLayout<const N: usize> {
    /// Source register index for each destination slot
    pub words: [usize; N],
    /// Swap the two bytes of every selected register
    pub swap_bytes: bool,
    /// Reverse the complete serialised byte sequence
    pub reverse: bool,
}

impl<const N: usize> WordLayout<N> {
    pub const fn new(words: [usize; N], swap_bytes: bool, reverse: bool) -> Self {
        Self {
            words,
            swap_bytes,
            reverse,
        }
    }

    /// Serialise `regs` according to this layout into `out`
    ///
    /// `out` must hold exactly `2 * N` bytes.
    pub fn arrange_into(&self, regs: &[u16; N], out: &mut [u8]) {
        debug_assert_eq!(out.len(), N * 2, "output buffer size mismatch");

        for (slot, &source) in self.words.iter().enumerate() {
            let word = if self.swap_bytes {
                regs[source].swap_bytes()
            } else {
                regs[source]
            };
            out[slot * 2..slot * 2 + 2].copy_from_slice(&word.to_be_bytes());
        }

        if self.reverse {
            out.reverse();
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_uppercase().replace(['-', '_'], "")
}

// ============================================================================
// 16-bit
// ============================================================================

/// Byte order of a single 16-bit register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder16 {
    /// High byte first, the word as received
    #[default]
    Ab,
    /// Low byte first, the word is byte-swapped before use
    Ba,
}

impl ByteOrder16 {
    pub const ALL: [Self; 2] = [Self::Ab, Self::Ba];

    /// Parse "AB" / "BA" (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "AB" => Some(Self::Ab),
            "BA" => Some(Self::Ba),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ab => "AB",
            Self::Ba => "BA",
        }
    }

    pub fn swaps_bytes(&self) -> bool {
        matches!(self, Self::Ba)
    }

    /// Apply this order to a received register
    #[inline]
    pub fn apply(&self, reg: u16) -> u16 {
        if self.swaps_bytes() {
            reg.swap_bytes()
        } else {
            reg
        }
    }
}

impl std::fmt::Display for ByteOrder16 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// 32-bit
// ============================================================================

/// Byte/word order of a value spread over 2 registers
///
/// For registers `[0x1234, 0x5678]`:
/// - `Abcd`: `0x12345678`
/// - `Dcba`: `0x78563412`
/// - `Badc`: `0x34127856`
/// - `Cdab`: `0x56781234` (common on Modbus PLCs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder32 {
    #[default]
    Abcd,
    Dcba,
    Badc,
    Cdab,
}

impl ByteOrder32 {
    pub const ALL: [Self; 4] = [Self::Abcd, Self::Dcba, Self::Badc, Self::Cdab];

    pub fn parse(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "ABCD" => Some(Self::Abcd),
            "DCBA" => Some(Self::Dcba),
            "BADC" => Some(Self::Badc),
            "CDAB" => Some(Self::Cdab),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abcd => "ABCD",
            Self::Dcba => "DCBA",
            Self::Badc => "BADC",
            Self::Cdab => "CDAB",
        }
    }

    pub const fn layout(&self) -> WordLayout<2> {
        match self {
            Self::Abcd => WordLayout::new([0, 1], false, false),
            Self::Dcba => WordLayout::new([0, 1], false, true),
            Self::Badc => WordLayout::new([0, 1], true, false),
            Self::Cdab => WordLayout::new([1, 0], false, false),
        }
    }
}

impl std::fmt::Display for ByteOrder32 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// 64-bit
// ============================================================================

/// Byte/word order of a value spread over 4 registers
///
/// Each pattern is a fixed [`WordLayout`]; see [`ByteOrder64::layout`]. The
/// layouts are what deployed device maps were written against, so a few of
/// them do not produce the byte sequence their label suggests
/// (`Hgfedcba` and `Ghefcdab` share one layout, `Dcbahgfe` is the identity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder64 {
    #[default]
    Abcdefgh,
    Hgfedcba,
    Badcfehg,
    Cdabghef,
    Dcbahgfe,
    Ghefcdab,
    Fehgbadc,
    Efghabcd,
}

impl ByteOrder64 {
    pub const ALL: [Self; 8] = [
        Self::Abcdefgh,
        Self::Hgfedcba,
        Self::Badcfehg,
        Self::Cdabghef,
        Self::Dcbahgfe,
        Self::Ghefcdab,
        Self::Fehgbadc,
        Self::Efghabcd,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "ABCDEFGH" => Some(Self::Abcdefgh),
            "HGFEDCBA" => Some(Self::Hgfedcba),
            "BADCFEHG" => Some(Self::Badcfehg),
            "CDABGHEF" => Some(Self::Cdabghef),
            "DCBAHGFE" => Some(Self::Dcbahgfe),
            "GHEFCDAB" => Some(Self::Ghefcdab),
            "FEHGBADC" => Some(Self::Fehgbadc),
            "EFGHABCD" => Some(Self::Efghabcd),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abcdefgh => "ABCDEFGH",
            Self::Hgfedcba => "HGFEDCBA",
            Self::Badcfehg => "BADCFEHG",
            Self::Cdabghef => "CDABGHEF",
            Self::Dcbahgfe => "DCBAHGFE",
            Self::Ghefcdab => "GHEFCDAB",
            Self::Fehgbadc => "FEHGBADC",
            Self::Efghabcd => "EFGHABCD",
        }
    }

    pub const fn layout(&self) -> WordLayout<4> {
        match self {
            Self::Abcdefgh => WordLayout::new([0, 1, 2, 3], false, false),
            Self::Hgfedcba => WordLayout::new([3, 2, 1, 0], false, true),
            Self::Badcfehg => WordLayout::new([0, 1, 2, 3], true, false),
            Self::Cdabghef => WordLayout::new([1, 0, 3, 2], false, false),
            Self::Dcbahgfe => WordLayout::new([3, 2, 1, 0], true, true),
            Self::Ghefcdab => WordLayout::new([3, 2, 1, 0], false, true),
            Self::Fehgbadc => WordLayout::new([2, 3, 0, 1], false, true),
            Self::Efghabcd => WordLayout::new([2, 3, 0, 1], true, true),
        }
    }
}

impl std::fmt::Display for ByteOrder64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
