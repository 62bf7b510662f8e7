use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Number of key positions on a 42-key split board (36 main + 6 thumb).
pub const KEY_COUNT: usize = 42;

/// Keys per half in each of the `KEYS_L` / `KEYS_R` groupings.
/// The outermost column (pinky stretch) is not part of the groupings.
pub const GROUP_KEYS_PER_HAND: usize = 15;

/// Keys in the thumb cluster, both halves.
pub const THUMB_COUNT: usize = 6;

const KEYS_PER_ROW: usize = 12;

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Row {
    Top,
    Middle,
    Bottom,
    Thumb,
}

impl Row {
    pub fn mnemonic(&self) -> char {
        match self {
            Self::Top => 'T',
            Self::Middle => 'M',
            Self::Bottom => 'B',
            Self::Thumb => 'H',
        }
    }
}

/// Symbolic key position: `<hand><row><column>`, column 0 being the
/// innermost key of that half.
///
/// Variants are declared in the order the ZMK headers list them, so
/// `KeyLabel::iter()` walks the board row by row, left to right.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum KeyLabel {
    // Row 0 - Top
    Lt5,
    Lt4,
    Lt3,
    Lt2,
    Lt1,
    Lt0,
    Rt0,
    Rt1,
    Rt2,
    Rt3,
    Rt4,
    Rt5,
    // Row 1 - Middle
    Lm5,
    Lm4,
    Lm3,
    Lm2,
    Lm1,
    Lm0,
    Rm0,
    Rm1,
    Rm2,
    Rm3,
    Rm4,
    Rm5,
    // Row 2 - Bottom
    Lb5,
    Lb4,
    Lb3,
    Lb2,
    Lb1,
    Lb0,
    Rb0,
    Rb1,
    Rb2,
    Rb3,
    Rb4,
    Rb5,
    // Row 3 - Thumbs
    Lh2,
    Lh1,
    Lh0,
    Rh0,
    Rh1,
    Rh2,
}

impl KeyLabel {
    /// Position in header declaration order (0..42).
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::iter().nth(ordinal)
    }

    pub fn row(&self) -> Row {
        match self.ordinal() / KEYS_PER_ROW {
            0 => Row::Top,
            1 => Row::Middle,
            2 => Row::Bottom,
            _ => Row::Thumb,
        }
    }

    pub fn hand(&self) -> Hand {
        let half = if self.is_thumb() { THUMB_COUNT / 2 } else { 6 };
        if self.ordinal() % KEYS_PER_ROW < half {
            Hand::Left
        } else {
            Hand::Right
        }
    }

    /// Offset from the inner edge of the half: 0..=5 on main rows,
    /// 0..=2 on the thumb row.
    pub fn column(&self) -> u8 {
        let half = if self.is_thumb() { THUMB_COUNT / 2 } else { 6 };
        let pos = self.ordinal() % KEYS_PER_ROW;
        let col = match self.hand() {
            Hand::Left => half - 1 - pos,
            Hand::Right => pos - half,
        };
        col as u8
    }

    pub fn is_thumb(&self) -> bool {
        self.ordinal() >= KEYS_PER_ROW * 3
    }

    /// Builds a label from its parts. Returns `None` when the column is out
    /// of range for the row.
    pub fn from_parts(hand: Hand, row: Row, column: u8) -> Option<Self> {
        Self::iter().find(|l| l.hand() == hand && l.row() == row && l.column() == column)
    }
}

/// Left-hand main keys, inner column outward, top row first.
pub const KEYS_L: [KeyLabel; GROUP_KEYS_PER_HAND] = [
    KeyLabel::Lt0,
    KeyLabel::Lt1,
    KeyLabel::Lt2,
    KeyLabel::Lt3,
    KeyLabel::Lt4,
    KeyLabel::Lm0,
    KeyLabel::Lm1,
    KeyLabel::Lm2,
    KeyLabel::Lm3,
    KeyLabel::Lm4,
    KeyLabel::Lb0,
    KeyLabel::Lb1,
    KeyLabel::Lb2,
    KeyLabel::Lb3,
    KeyLabel::Lb4,
];

/// Right-hand main keys, mirror of [`KEYS_L`].
pub const KEYS_R: [KeyLabel; GROUP_KEYS_PER_HAND] = [
    KeyLabel::Rt0,
    KeyLabel::Rt1,
    KeyLabel::Rt2,
    KeyLabel::Rt3,
    KeyLabel::Rt4,
    KeyLabel::Rm0,
    KeyLabel::Rm1,
    KeyLabel::Rm2,
    KeyLabel::Rm3,
    KeyLabel::Rm4,
    KeyLabel::Rb0,
    KeyLabel::Rb1,
    KeyLabel::Rb2,
    KeyLabel::Rb3,
    KeyLabel::Rb4,
];

/// Thumb cluster in physical left-to-right order: outer-left first,
/// outer-right last.
pub const THUMBS: [KeyLabel; THUMB_COUNT] = [
    KeyLabel::Lh2,
    KeyLabel::Lh1,
    KeyLabel::Lh0,
    KeyLabel::Rh0,
    KeyLabel::Rh1,
    KeyLabel::Rh2,
];

/// Canonical label names in declaration order.
pub fn canonical_names() -> Vec<String> {
    KeyLabel::iter().map(|l| l.to_string()).collect()
}

/// The three bulk groupings every layout exposes.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
pub enum Grouping {
    #[strum(serialize = "KEYS_L")]
    KeysLeft,
    #[strum(serialize = "KEYS_R")]
    KeysRight,
    #[strum(serialize = "THUMBS")]
    Thumbs,
}

impl Grouping {
    pub fn labels(&self) -> &'static [KeyLabel] {
        match self {
            Self::KeysLeft => &KEYS_L,
            Self::KeysRight => &KEYS_R,
            Self::Thumbs => &THUMBS,
        }
    }
}
