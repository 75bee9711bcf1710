//! Random display names from romaji syllable combinations

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::dice::D4;

const ROMAJI: &[&str] = &[
    "a", "i", "u", "e", "o", "ka", "ki", "ku", "ke", "ko", "sa", "shi", "su", "se", "so", "ta",
    "chi", "tsu", "te", "to", "na", "ni", "nu", "ne", "no", "ha", "hi", "fu", "he", "ho", "ma",
    "mi", "mu", "me", "mo", "ya", "yu", "yo", "ra", "ri", "ru", "re", "ro", "wa", "wo", "ga",
    "gi", "gu", "ge", "go", "za", "ji", "zu", "ze", "zo", "da", "de", "do", "ba", "bi", "bu",
    "be", "bo", "pa", "pi", "pu", "pe", "po", "kya", "kyu", "kyo", "sha", "shu", "sho", "cha",
    "chu", "cho", "nya", "nyu", "nyo", "hya", "hyu", "hyo", "mya", "myu", "myo", "rya", "ryu",
    "ryo", "gya", "gyu", "gyo", "ja", "ju", "jo", "bya", "byu", "byo", "pya", "pyu", "pyo",
];

fn capitalize(mut name: String) -> String {
    if let Some(first) = name.get(0..1) {
        let upper = first.to_ascii_uppercase();
        name.replace_range(0..1, &upper);
    }
    name
}

/// Location name of 2-5 syllables; longer names get a hyphen break.
pub fn place_name(rng: &mut ChaCha8Rng) -> String {
    let sections = D4.roll(rng) + 1;
    let mut name = String::new();
    for step in 0..sections {
        name.push_str(ROMAJI[rng.gen_range(0..ROMAJI.len())]);
        if sections > 3 && step == 2 {
            name.push('-');
        }
    }
    capitalize(name)
}

/// Personal name of 2-4 syllables.
pub fn person_name(rng: &mut ChaCha8Rng) -> String {
    let sections = rng.gen_range(2..=4);
    let mut name = String::new();
    for _ in 0..sections {
        name.push_str(ROMAJI[rng.gen_range(0..ROMAJI.len())]);
    }
    capitalize(name)
}
