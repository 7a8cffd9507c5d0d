//! Fixed multilingual sample strings for the round-trip check.
//!
//! Chosen to exercise multi-byte and non-BMP encoding paths: CJK scripts,
//! Cyrillic, Vietnamese diacritics, and symbol/emoji characters. The set is
//! deliberately hardcoded; the round-trip check is self-contained and never
//! touches the target page.

/// A known-good Unicode sample labelled by language.
#[derive(Debug, Clone, Copy)]
pub struct SampleEntry {
    pub language: &'static str,
    pub text: &'static str,
}

pub const SAMPLES: [SampleEntry; 6] = [
    SampleEntry {
        language: "Japanese",
        text: "開発者向けのツール",
    },
    SampleEntry {
        language: "Korean",
        text: "개발자를 위한 도구",
    },
    SampleEntry {
        language: "Russian",
        text: "инструменты для разработчиков",
    },
    SampleEntry {
        language: "Chinese",
        text: "开发人员工具",
    },
    SampleEntry {
        language: "Vietnamese",
        text: "công cụ cho nhà phát triển",
    },
    SampleEntry {
        language: "Special",
        text: "🔧 → ♠ × ≠ ≤ ÷",
    },
];
