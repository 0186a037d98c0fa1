//! Hobbit-time phrases
//!
//! Maps the hour to a phrase from the Shire meal schedule. Every entry
//! must fit the face's text buffer, checked by test.

/// Longest phrase the face can show
pub const MAX_PHRASE_LEN: usize = 20;

/// One phrase per hour of the day
const PHRASES: [&str; 24] = [
    "middle of the night", // 00
    "middle of the night", // 01
    "the dead of night",   // 02
    "the dead of night",   // 03
    "before dawn",         // 04
    "early morning",       // 05
    "almost breakfast",    // 06
    "breakfast",           // 07
    "after breakfast",     // 08
    "second breakfast",    // 09
    "almost elevenses",    // 10
    "elevenses",           // 11
    "almost luncheon",     // 12
    "luncheon",            // 13
    "after luncheon",      // 14
    "almost afternoon tea", // 15
    "afternoon tea",       // 16
    "after afternoon tea", // 17
    "almost dinner",       // 18
    "dinner",              // 19
    "almost supper",       // 20
    "supper",              // 21
    "after supper",        // 22
    "time for bed",        // 23
];

/// The phrase for a given hour (0-23)
pub const fn phrase_for_hour(hour: u8) -> &'static str {
    PHRASES[(hour % 24) as usize]
}
