//! Built-in codepoint maps

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::{CodepointMap, CodepointMapError, pairs::simplified_traditional};

/// Named codepoint map shipped with the tool
///
/// The Chinese presets are built from a curated table of common one-to-one
/// simplified/traditional pairs, not the full character sets. For complete
/// coverage load an OpenCC table such as `STCharacters.txt` with
/// [`CodepointMap::from_file`] (`--map-file` on the command line).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Preset {
    /// No remapping; the font is only round-tripped (and optionally optimized)
    #[default]
    None,
    /// Copy simplified characters from the source font as-is
    Hans,
    /// Copy traditional characters from the source font as-is
    Hant,
    /// Show simplified codepoints with traditional glyphs
    Hans2Hant,
    /// Show traditional codepoints with simplified glyphs
    Hant2Hans,
}

impl Preset {
    pub const ALL: [Preset; 5] =
        [Preset::None, Preset::Hans, Preset::Hant, Preset::Hans2Hant, Preset::Hant2Hans];

    pub fn name(self) -> &'static str {
        match self {
            Preset::None => "None",
            Preset::Hans => "Hans",
            Preset::Hant => "Hant",
            Preset::Hans2Hant => "Hans2Hant",
            Preset::Hant2Hans => "Hant2Hans",
        }
    }

    pub fn is_none(self) -> bool {
        self == Preset::None
    }

    pub fn codepoint_map(self) -> CodepointMap {
        let pairs = simplified_traditional();
        match self {
            Preset::None => CodepointMap::new(),
            Preset::Hans => CodepointMap::from_char_pairs(pairs.map(|(s, _)| (s, s))),
            Preset::Hant => CodepointMap::from_char_pairs(pairs.map(|(_, t)| (t, t))),
            Preset::Hans2Hant => CodepointMap::from_char_pairs(pairs),
            Preset::Hant2Hans => CodepointMap::from_char_pairs(pairs.map(|(s, t)| (t, s))),
        }
    }
}

impl FromStr for Preset {
    type Err = CodepointMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CodepointMapError::UnknownPreset(s.to_string()))
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
