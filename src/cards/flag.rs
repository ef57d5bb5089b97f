//! Country flag glyphs built from regional indicator symbols

use tracing::warn;

/// Shown when there is no usable country code
pub const GLOBE_FALLBACK: &str = "🌐";

/// 'A' + offset == REGIONAL INDICATOR SYMBOL LETTER A (U+1F1E6)
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1A5;

/// Flag emoji for a two-letter ISO 3166-1 country code.
///
/// Absent input or anything that is not exactly two characters yields
/// [`GLOBE_FALLBACK`]. A character that cannot be shifted into a valid code
/// point makes the function return the code unchanged.
#[must_use]
pub fn country_flag_emoji(country_code: Option<&str>) -> String {
    let Some(code) = country_code else {
        return GLOBE_FALLBACK.to_string();
    };
    if code.chars().count() != 2 {
        return GLOBE_FALLBACK.to_string();
    }

    let mut flag = String::with_capacity(8);
    for c in code.to_uppercase().chars() {
        match (c as u32)
            .checked_add(REGIONAL_INDICATOR_OFFSET)
            .and_then(char::from_u32)
        {
            Some(indicator) => flag.push(indicator),
            None => {
                warn!(country_code = code, "Cannot build flag emoji, using the country code");
                return code.to_string();
            }
        }
    }
    flag
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("RU", "🇷🇺")]
    #[case("de", "🇩🇪")]
    #[case("uS", "🇺🇸")]
    fn test_known_flags(#[case] code: &str, #[case] expected: &str) {
        assert_eq!(country_flag_emoji(Some(code)), expected);
    }

    #[test]
    fn test_every_letter_pair_maps_to_regional_indicators() {
        for first in 'a'..='z' {
            for second in ['A', 'm', 'Z'] {
                let code: String = [first, second].iter().collect();
                let flag: Vec<u32> = country_flag_emoji(Some(&code))
                    .chars()
                    .map(|c| c as u32)
                    .collect();
                let expected: Vec<u32> = code
                    .to_uppercase()
                    .chars()
                    .map(|c| 127_397 + c as u32)
                    .collect();
                assert_eq!(flag, expected, "code {code}");
            }
        }
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("R"))]
    #[case(Some("RUS"))]
    #[case(Some("United Kingdom"))]
    fn test_fallback_for_wrong_length(#[case] code: Option<&str>) {
        assert_eq!(country_flag_emoji(code), "🌐");
    }

    #[test]
    fn test_unencodable_code_is_returned_unchanged() {
        let code = "\u{FFFFD}a";
        assert_eq!(country_flag_emoji(Some(code)), code);
    }
}
