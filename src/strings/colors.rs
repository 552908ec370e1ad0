//! # Colour Codes
//!
//! Legacy section-sign formatting codes as understood by game clients, plus
//! helpers to translate `&`-style codes from config and render them on a terminal.

use regex::Regex;
use std::sync::LazyLock;

pub const SECTION: char = '\u{a7}';
pub const RED: &str = "\u{a7}c";
pub const RESET: &str = "\u{a7}r";

static ALTERNATE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&([0-9a-fA-Fk-oK-OrR])").unwrap());

static SECTION_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{a7}([0-9a-fA-Fk-oK-OrR])").unwrap());

/// Turns `&c` style codes into section-sign codes.
pub fn translate_alternate(text: &str) -> String {
    ALTERNATE_CODE
        .replace_all(text, |caps: &regex::Captures| {
            format!("{SECTION}{}", caps[1].to_lowercase())
        })
        .into_owned()
}

/// Removes every section-sign code.
pub fn strip(text: &str) -> String {
    SECTION_CODE.replace_all(text, "").into_owned()
}

/// Renders section-sign codes as ANSI escapes, resetting at the end of the line.
pub fn to_ansi(text: &str) -> String {
    if !SECTION_CODE.is_match(text) {
        return text.to_string();
    }
    let mut rendered = SECTION_CODE
        .replace_all(text, |caps: &regex::Captures| {
            ansi_for(&caps[1].to_lowercase()).to_string()
        })
        .into_owned();
    rendered.push_str("\x1b[0m");
    rendered
}

fn ansi_for(code: &str) -> &'static str {
    match code {
        "0" => "\x1b[30m",
        "1" => "\x1b[34m",
        "2" => "\x1b[32m",
        "3" => "\x1b[36m",
        "4" => "\x1b[31m",
        "5" => "\x1b[35m",
        "6" => "\x1b[33m",
        "7" => "\x1b[37m",
        "8" => "\x1b[90m",
        "9" => "\x1b[94m",
        "a" => "\x1b[92m",
        "b" => "\x1b[96m",
        "c" => "\x1b[91m",
        "d" => "\x1b[95m",
        "e" => "\x1b[93m",
        "f" => "\x1b[97m",
        "l" => "\x1b[1m",
        "m" => "\x1b[9m",
        "n" => "\x1b[4m",
        "o" => "\x1b[3m",
        // k (obfuscated) has no terminal equivalent
        "k" => "",
        _ => "\x1b[0m",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_alternate() {
        assert_eq!(translate_alternate("&cNo &Lway"), "\u{a7}cNo \u{a7}lway");
        // Not a code
        assert_eq!(translate_alternate("Tom & Jerry &z"), "Tom & Jerry &z");
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip("\u{a7}cRed \u{a7}atext"), "Red text");
        assert_eq!(strip("plain"), "plain");
    }

    #[test]
    fn test_to_ansi() {
        assert_eq!(to_ansi("plain"), "plain");
        assert_eq!(to_ansi("\u{a7}cbad"), "\x1b[91mbad\x1b[0m");
    }
}
