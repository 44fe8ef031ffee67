//! Pronounceable agent names for status panels and logs.

use gc_core::SimRng;

const VOWELS:     &[u8] = b"aeiou";
const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";

/// A five-letter consonant/vowel alternating name, capitalised ("Tavok").
pub fn random_name(rng: &mut SimRng) -> String {
    let mut name = String::with_capacity(5);
    for i in 0..5 {
        let pool = if i % 2 == 0 { CONSONANTS } else { VOWELS };
        let &b = rng.choose(pool).unwrap_or(&b'x');
        let ch = b as char;
        name.push(if i == 0 { ch.to_ascii_uppercase() } else { ch });
    }
    name
}
