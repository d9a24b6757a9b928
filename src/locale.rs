// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale code checks.
//!
//! A locale is an ISO 639-1 primary subtag, optionally followed by a
//! two-letter region (`pt-BR`, `sr-ME`). Codes outside that shape are still
//! usable as directory names, so callers treat them as a warning.

/// Whether `code` is a known ISO 639-1 two-letter language code.
///
/// # Examples
/// ```
/// assert!(content_seed::locale::is_iso639_1("sr"));
/// assert!(!content_seed::locale::is_iso639_1("xx"));
/// ```
pub fn is_iso639_1(code: &str) -> bool {
    matches!(
        code,
        "aa" | "ab" | "af" | "ak" | "am" | "an" | "ar" | "as" | "av" | "ay" | "az"
            | "ba" | "be" | "bg" | "bh" | "bi" | "bm" | "bn" | "bo" | "br" | "bs"
            | "ca" | "ce" | "ch" | "co" | "cr" | "cs" | "cu" | "cv" | "cy"
            | "da" | "de" | "dv" | "dz"
            | "ee" | "el" | "en" | "eo" | "es" | "et" | "eu"
            | "fa" | "ff" | "fi" | "fj" | "fo" | "fr" | "fy"
            | "ga" | "gd" | "gl" | "gn" | "gu" | "gv"
            | "ha" | "he" | "hi" | "ho" | "hr" | "ht" | "hu" | "hy" | "hz"
            | "ia" | "id" | "ie" | "ig" | "ii" | "ik" | "io" | "is" | "it" | "iu"
            | "ja" | "jv"
            | "ka" | "kg" | "ki" | "kj" | "kk" | "kl" | "km" | "kn" | "ko" | "kr" | "ks" | "ku" | "kv" | "kw" | "ky"
            | "la" | "lb" | "lg" | "li" | "ln" | "lo" | "lt" | "lu" | "lv"
            | "mg" | "mh" | "mi" | "mk" | "ml" | "mn" | "mr" | "ms" | "mt" | "my"
            | "na" | "nb" | "nd" | "ne" | "ng" | "nl" | "nn" | "no" | "nr" | "nv" | "ny"
            | "oc" | "oj" | "om" | "or" | "os"
            | "pa" | "pi" | "pl" | "ps" | "pt"
            | "qu"
            | "rm" | "rn" | "ro" | "ru" | "rw"
            | "sa" | "sc" | "sd" | "se" | "sg" | "si" | "sk" | "sl" | "sm" | "sn" | "so" | "sq" | "sr" | "ss" | "st" | "su" | "sv" | "sw"
            | "ta" | "te" | "tg" | "th" | "ti" | "tk" | "tl" | "tn" | "to" | "tr" | "ts" | "tt" | "tw" | "ty"
            | "ug" | "uk" | "ur" | "uz"
            | "ve" | "vi" | "vo"
            | "wa" | "wo"
            | "xh"
            | "yi" | "yo"
            | "za" | "zh" | "zu"
    )
}

/// Whether `code` looks like `ll` or `ll-RR` with a known language subtag.
pub fn is_known_locale(code: &str) -> bool {
    match code.split_once('-') {
        None => is_iso639_1(code),
        Some((lang, region)) => {
            is_iso639_1(lang)
                && region.len() == 2
                && region.chars().all(|c| c.is_ascii_uppercase())
        }
    }
}

/// English display name for the language part of a locale, used in summaries.
pub fn display_name(code: &str) -> Option<&'static str> {
    let lang = code.split('-').next().unwrap_or(code);
    match lang {
        "sr" => Some("Serbian"),
        "en" => Some("English"),
        "de" => Some("German"),
        "it" => Some("Italian"),
        "fr" => Some("French"),
        "es" => Some("Spanish"),
        "pt" => Some("Portuguese"),
        "hr" => Some("Croatian"),
        "bs" => Some("Bosnian"),
        "sl" => Some("Slovenian"),
        "mk" => Some("Macedonian"),
        "hu" => Some("Hungarian"),
        "ro" => Some("Romanian"),
        "ru" => Some("Russian"),
        "nl" => Some("Dutch"),
        "pl" => Some("Polish"),
        "cs" => Some("Czech"),
        "el" => Some("Greek"),
        "tr" => Some("Turkish"),
        _ => None,
    }
}
