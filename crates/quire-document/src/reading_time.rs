//! Reading time estimation.
//!
//! Markdown syntax is stripped before counting, then CJK ideographs and whitespace-separated
//! words are counted as separate reading units:
//! - CJK ideographs are read at 300 per minute
//! - other words are read at 200 per minute
//!
//! The estimate is rounded up and never below one minute.

use std::sync::LazyLock;

use regex::Regex;

/// CJK ideographs read per minute.
const CJK_PER_MINUTE: usize = 300;

/// Non-CJK words read per minute.
const WORDS_PER_MINUTE: usize = 200;

/// Fenced code blocks, including their contents.
static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[\s\S]*?```").expect("valid fenced code regex"));

/// Inline code spans.
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]+`").expect("valid inline code regex"));

/// ATX heading markers.
static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#{1,6}\s").expect("valid heading regex"));

/// Emphasis and strikethrough markers.
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*_~]+").expect("valid emphasis regex"));

/// Image syntax `![alt](src)`.
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\([^)]+\)").expect("valid image regex"));

/// Link syntax `[text](href)`; the text is kept.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid link regex"));

/// Runs of newlines.
static NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("valid newline regex"));

/// Estimates the reading time of `content` in whole minutes (at least 1).
pub fn reading_time(content: &str) -> u32 {
    let plain = strip_markdown(content);

    let cjk = plain.chars().filter(|&c| is_cjk_ideograph(c)).count();
    let words = plain
        .split(is_cjk_ideograph)
        .flat_map(str::split_whitespace)
        .count();

    // ceil(cjk / 300 + words / 200), kept in integers over the common denominator.
    let denominator = CJK_PER_MINUTE * WORDS_PER_MINUTE / gcd(CJK_PER_MINUTE, WORDS_PER_MINUTE);
    let units = cjk * (denominator / CJK_PER_MINUTE) + words * (denominator / WORDS_PER_MINUTE);
    let minutes = units.div_ceil(denominator).max(1);

    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Removes markdown syntax that doesn't contribute to reading time.
fn strip_markdown(content: &str) -> String {
    let text = FENCED_CODE.replace_all(content, "");
    let text = INLINE_CODE.replace_all(&text, "");
    let text = HEADING_MARKER.replace_all(&text, "");
    let text = EMPHASIS.replace_all(&text, "");
    let text = LINK.replace_all(&text, "$1");
    let text = IMAGE.replace_all(&text, "");
    let text = NEWLINES.replace_all(&text, " ");
    text.trim().to_string()
}

/// Returns true for code points in the CJK Unified Ideographs block.
fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Greatest common divisor.
const fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}
