use regex::Regex;

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn whole_word(pattern: &str) -> Regex {
    Regex::new(&format!(r"\b{}\b", pattern)).unwrap()
}

lazy_static::lazy_static! {
    pub static ref MIXED_ORDINAL: Regex = whole_word(r"-?\d+(?:st|th|nd|rd)");

    pub static ref DATE_ISO8601: Regex = whole_word(
        r"(?P<year>\d{4})-(?P<month>0[1-9]|1[0-2])-(?P<day>0[1-9]|[12][0-9]|3[01])(?:[ T](?P<hour>\d{2}):(?P<minute>\d{2})(?::(?P<second>\d{2})(?:\.(?P<fraction>\d+))?)?)?"
    );

    pub static ref DATE_DDMONYYYY: Regex = whole_word(&format!(
        r"(?P<day>0[1-9]|[12][0-9]|3[01])\s+(?P<month>{}),?\s+(?P<year>\d{{4}})",
        MONTH_ABBREVIATIONS.join("|")
    ));

    // Comma must be followed by a digit to be part of the number.
    pub static ref INTEGER: Regex = whole_word(r"\d+(?:,\d+)*");

    pub static ref STRICT_GROUPING: Regex = Regex::new(r"^\d{1,3}(?:,\d{3})*$|^\d+$").unwrap();

    // Run against the text following a candidate integer.
    static ref FLOAT_AFTER: Regex = Regex::new(r"^\.\d+(?:[^a-zA-Z.]|$)").unwrap();

    // Run against the text preceding a candidate integer.
    static ref FLOAT_BEFORE: Regex = Regex::new(r"\d\.$").unwrap();
}

// True when text[start..end] is the whole part or the fraction of a float.
pub fn is_float_fragment(text: &str, start: usize, end: usize) -> bool {
    let before = &text[..start];
    // only the last two characters matter
    let tail = before.char_indices().rev().nth(1).map_or(0, |(i, _)| i);
    FLOAT_BEFORE.is_match(&before[tail..]) || FLOAT_AFTER.is_match(&text[end..])
}
