//! Locale-aware string comparison for name ordering
//!
//! Names compare the way a Portuguese-speaking reader expects: accents and
//! letter case only break ties between otherwise equal names. Both sides are
//! brought to canonical decomposition first, so precomposed and combining
//! accents sort alike.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two strings with accent- and case-insensitive primary strength
///
/// Levels, in order: base letters, accents, case (lowercase first), raw
/// code points.
pub fn compare(a: &str, b: &str) -> Ordering {
    let (a_nfd, b_nfd): (Vec<char>, Vec<char>) = (a.nfd().collect(), b.nfd().collect());

    let primary = base_letters(&a_nfd).cmp(&base_letters(&b_nfd));
    if primary != Ordering::Equal {
        return primary;
    }

    let accents = lowercase(&a_nfd).cmp(&lowercase(&b_nfd));
    if accents != Ordering::Equal {
        return accents;
    }

    case_level(&a_nfd, &b_nfd).then_with(|| a.cmp(b))
}

fn lowercase(chars: &[char]) -> Vec<char> {
    chars.iter().flat_map(|c| c.to_lowercase()).collect()
}

/// Lowercased letters with every combining mark dropped
fn base_letters(chars: &[char]) -> Vec<char> {
    chars
        .iter()
        .filter(|c| !is_combining_mark(**c))
        .flat_map(|c| c.to_lowercase())
        .flat_map(expand_letter)
        .collect()
}

fn case_level(a: &[char], b: &[char]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) if y.is_uppercase() => return Ordering::Less,
            (false, true) if x.is_uppercase() => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

/// Latin letters whose stroke or ligature has no canonical decomposition
fn expand_letter(c: char) -> Vec<char> {
    match c {
        'ł' => vec!['l'],
        'ø' => vec!['o'],
        'đ' | 'ð' => vec!['d'],
        'ħ' => vec!['h'],
        'ŧ' => vec!['t'],
        'ı' => vec!['i'],
        'ß' => vec!['s', 's'],
        'æ' => vec!['a', 'e'],
        'œ' => vec!['o', 'e'],
        'þ' => vec!['t', 'h'],
        _ => vec![c],
    }
}
