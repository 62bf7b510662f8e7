use crate::labels::{Grouping, KeyLabel, GROUP_KEYS_PER_HAND, KEY_COUNT, THUMB_COUNT};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Electrical scan position of a key, as consumed by the firmware keymap.
pub type MatrixIndex = u8;

/// Declares one layout module: a `pub const` per label plus the
/// `KEYS_L` / `KEYS_R` / `THUMBS` groupings. Values are written out one by
/// one; the gaps in some boards are matrix slots with no switch.
macro_rules! key_labels {
    ($(#[$meta:meta])* $module:ident { $($name:ident = $index:literal),+ $(,)? }) => {
        $(#[$meta])*
        pub mod $module {
            use super::MatrixIndex;
            use crate::labels::{GROUP_KEYS_PER_HAND, KEY_COUNT, THUMB_COUNT};

            $(pub const $name: MatrixIndex = $index;)+

            /// Label names in declaration order.
            pub const NAMES: [&str; KEY_COUNT] = [$(stringify!($name)),+];

            /// Indices in declaration order, parallel to [`NAMES`].
            pub const TABLE: [MatrixIndex; KEY_COUNT] = [$($name),+];

            /// Left-hand keys.
            pub const KEYS_L: [MatrixIndex; GROUP_KEYS_PER_HAND] = [
                LT0, LT1, LT2, LT3, LT4, LM0, LM1, LM2, LM3, LM4, LB0, LB1, LB2, LB3, LB4,
            ];

            /// Right-hand keys.
            pub const KEYS_R: [MatrixIndex; GROUP_KEYS_PER_HAND] = [
                RT0, RT1, RT2, RT3, RT4, RM0, RM1, RM2, RM3, RM4, RB0, RB1, RB2, RB3, RB4,
            ];

            pub const THUMBS: [MatrixIndex; THUMB_COUNT] = [LH2, LH1, LH0, RH0, RH1, RH2];
        }
    };
}

key_labels! {
    /// Corne Choc Pro 42-key layout, numbered after the board's matrix
    /// transform. Indices 6, 13, 20, 27, 34, 41-44 and 48-49 have no
    /// key.
    corne_choc_pro {
        // Row 0 - Top
        LT5 = 0, LT4 = 1, LT3 = 2, LT2 = 3, LT1 = 4, LT0 = 5,
        RT0 = 7, RT1 = 8, RT2 = 9, RT3 = 10, RT4 = 11, RT5 = 12,
        // Row 1 - Middle
        LM5 = 14, LM4 = 15, LM3 = 16, LM2 = 17, LM1 = 18, LM0 = 19,
        RM0 = 21, RM1 = 22, RM2 = 23, RM3 = 24, RM4 = 25, RM5 = 26,
        // Row 2 - Bottom
        LB5 = 28, LB4 = 29, LB3 = 30, LB2 = 31, LB1 = 32, LB0 = 33,
        RB0 = 35, RB1 = 36, RB2 = 37, RB3 = 38, RB4 = 39, RB5 = 40,
        // Row 3 - Thumbs
        LH2 = 45, LH1 = 46, LH0 = 47,
        RH0 = 50, RH1 = 51, RH2 = 52,
    }
}

key_labels! {
    /// xk42 42-key layout: 6 columns per side, 4 rows, contiguous numbering.
    xk42 {
        // Row 0 - Top
        LT5 = 0, LT4 = 1, LT3 = 2, LT2 = 3, LT1 = 4, LT0 = 5,
        RT0 = 6, RT1 = 7, RT2 = 8, RT3 = 9, RT4 = 10, RT5 = 11,
        // Row 1 - Middle
        LM5 = 12, LM4 = 13, LM3 = 14, LM2 = 15, LM1 = 16, LM0 = 17,
        RM0 = 18, RM1 = 19, RM2 = 20, RM3 = 21, RM4 = 22, RM5 = 23,
        // Row 2 - Bottom
        LB5 = 24, LB4 = 25, LB3 = 26, LB2 = 27, LB1 = 28, LB0 = 29,
        RB0 = 30, RB1 = 31, RB2 = 32, RB3 = 33, RB4 = 34, RB5 = 35,
        // Row 3 - Thumbs
        LH2 = 36, LH1 = 37, LH0 = 38,
        RH0 = 39, RH1 = 40, RH2 = 41,
    }
}

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum KnownLayout {
    #[strum(to_string = "corne_choc_pro", serialize = "42")]
    CorneChocPro,
    #[strum(serialize = "xk42")]
    Xk42,
}

impl KnownLayout {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CorneChocPro => "Corne Choc Pro",
            Self::Xk42 => "xk42",
        }
    }

    /// Free-text subtitle used in the header banner.
    pub fn description(&self) -> &'static str {
        match self {
            Self::CorneChocPro => "based on actual matrix transform",
            Self::Xk42 => "6 columns per side, 4 rows",
        }
    }

    /// File stem of the ZMK header under `config/key-labels/`.
    pub fn header_stem(&self) -> &'static str {
        match self {
            Self::CorneChocPro => "42",
            Self::Xk42 => "xk42",
        }
    }

    pub fn indices(&self) -> &'static [MatrixIndex; KEY_COUNT] {
        match self {
            Self::CorneChocPro => &corne_choc_pro::TABLE,
            Self::Xk42 => &xk42::TABLE,
        }
    }

    pub fn names(&self) -> &'static [&'static str; KEY_COUNT] {
        match self {
            Self::CorneChocPro => &corne_choc_pro::NAMES,
            Self::Xk42 => &xk42::NAMES,
        }
    }

    pub fn index(&self, label: KeyLabel) -> MatrixIndex {
        self.indices()[label.ordinal()]
    }

    /// Reverse lookup. `None` for gap slots and out-of-range indices.
    pub fn label_at(&self, index: MatrixIndex) -> Option<KeyLabel> {
        self.indices()
            .iter()
            .position(|&i| i == index)
            .and_then(KeyLabel::from_ordinal)
    }

    pub fn keys_left(&self) -> &'static [MatrixIndex; GROUP_KEYS_PER_HAND] {
        match self {
            Self::CorneChocPro => &corne_choc_pro::KEYS_L,
            Self::Xk42 => &xk42::KEYS_L,
        }
    }

    pub fn keys_right(&self) -> &'static [MatrixIndex; GROUP_KEYS_PER_HAND] {
        match self {
            Self::CorneChocPro => &corne_choc_pro::KEYS_R,
            Self::Xk42 => &xk42::KEYS_R,
        }
    }

    pub fn thumbs(&self) -> &'static [MatrixIndex; THUMB_COUNT] {
        match self {
            Self::CorneChocPro => &corne_choc_pro::THUMBS,
            Self::Xk42 => &xk42::THUMBS,
        }
    }

    pub fn table(&self) -> LayoutTable {
        LayoutTable {
            name: self.display_name().to_string(),
            names: self.names().iter().map(|n| n.to_string()).collect(),
            indices: self.indices().to_vec(),
            keys_left: self.keys_left().to_vec(),
            keys_right: self.keys_right().to_vec(),
            thumbs: self.thumbs().to_vec(),
        }
    }
}

/// One layout's data in a form shared by built-in layouts and parsed
/// headers, so both are checked and rendered by the same code.
/// `names` and `indices` are parallel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTable {
    pub name: String,
    pub names: Vec<String>,
    pub indices: Vec<MatrixIndex>,
    pub keys_left: Vec<MatrixIndex>,
    pub keys_right: Vec<MatrixIndex>,
    pub thumbs: Vec<MatrixIndex>,
}

impl LayoutTable {
    pub fn get(&self, name: &str) -> Option<MatrixIndex> {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.indices.get(i).copied())
    }

    pub fn index_of(&self, label: KeyLabel) -> Option<MatrixIndex> {
        self.get(&label.to_string())
    }

    pub fn group(&self, grouping: Grouping) -> &[MatrixIndex] {
        match grouping {
            Grouping::KeysLeft => &self.keys_left,
            Grouping::KeysRight => &self.keys_right,
            Grouping::Thumbs => &self.thumbs,
        }
    }

    /// Name bound to `index`, if any.
    pub fn name_at(&self, index: MatrixIndex) -> Option<&str> {
        self.indices
            .iter()
            .position(|&i| i == index)
            .and_then(|p| self.names.get(p))
            .map(String::as_str)
    }
}

pub fn get_all_layouts() -> HashMap<KnownLayout, [MatrixIndex; KEY_COUNT]> {
    let mut map = HashMap::new();
    for layout in KnownLayout::iter() {
        map.insert(layout, *layout.indices());
    }
    map
}
