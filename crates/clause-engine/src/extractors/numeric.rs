// Spelled-out number resolution for durations like "thirty (30) days"

/// Number words recognised in contract durations. Table lookup only, so
/// compounds such as "twenty-five" are not summed.
const NUMBER_WORDS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
    ("hundred", 100),
];

/// Resolve a number word to its value after lower-casing and dropping every
/// non-letter character. Returns `None` for anything not in the table.
pub fn word_to_number(token: &str) -> Option<u32> {
    let letters: String = token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if letters.is_empty() {
        return None;
    }

    NUMBER_WORDS
        .iter()
        .find(|(word, _)| *word == letters)
        .map(|(_, value)| *value)
}

/// Resolve a captured duration token, either a digit run or a number word.
pub fn parse_duration(token: &str) -> Option<u32> {
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        token.parse().ok()
    } else {
        word_to_number(token)
    }
}
