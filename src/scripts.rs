//! Script-coverage probing via the character map.

use std::ops::RangeInclusive;

use skrifa::charmap::Charmap;
use skrifa::GlyphId;

/// Cyrillic block.
pub const CYRILLIC: RangeInclusive<u32> = 0x0400..=0x04FF;
/// Hiragana block.
pub const HIRAGANA: RangeInclusive<u32> = 0x3040..=0x309F;
/// Katakana block.
pub const KATAKANA: RangeInclusive<u32> = 0x30A0..=0x30FF;
/// Hangul Syllables block.
pub const HANGUL_SYLLABLES: RangeInclusive<u32> = 0xAC00..=0xD7AF;
/// Shared by the Japanese and Chinese probes: Han ideographs belong to both.
pub const CJK_UNIFIED: RangeInclusive<u32> = 0x4E00..=0x9FFF;

/// Which of the probed scripts a font can render at least one glyph for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSupport {
    pub cyrillic: bool,
    pub japanese: bool,
    pub korean: bool,
    pub chinese: bool,
}

impl ScriptSupport {
    /// Probe a font's character map. A script counts as supported when any
    /// codepoint in its range maps to a real glyph (present and not .notdef);
    /// each probe stops at the first hit.
    pub fn detect(charmap: &Charmap) -> Self {
        Self::detect_with(|cp| {
            charmap
                .map(cp)
                .is_some_and(|gid| gid != GlyphId::NOTDEF)
        })
    }

    /// Same probing logic over an arbitrary glyph-presence predicate.
    pub fn detect_with(has_glyph: impl Fn(u32) -> bool) -> Self {
        let any = |range: RangeInclusive<u32>| range.into_iter().any(&has_glyph);

        // Scanned once, feeds both flags.
        let han = any(CJK_UNIFIED);

        Self {
            cyrillic: any(CYRILLIC),
            japanese: any(HIRAGANA) || any(KATAKANA) || han,
            korean: any(HANGUL_SYLLABLES),
            chinese: han,
        }
    }
}
