//! Pattern-based extraction of ordinals, integers and dates from free-form text.
//!
//! Every extractor returns a lazy [`Hits`] iterator; [`scan`] chains several
//! extractors over the same text, extractor by extractor.
//!
//! ```
//! use numscan::{integers, mixed_ordinals, scan};
//!
//! let text = "On the 5th of May 1845, 77.9% agreed.";
//! let found: Vec<&str> = scan(text, [integers, mixed_ordinals]).map(|hit| hit.as_str()).collect();
//! assert_eq!(found, vec!["1845", "5th"]);
//! ```
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use thiserror::Error;

mod convert;
pub mod patterns;

pub use convert::{ConvertError, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Ordinal,
    DateIso8601,
    DateDdMonYyyy,
    Integer,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Ordinal => "ordinal",
            Kind::DateIso8601 => "date_iso8601",
            Kind::DateDdMonYyyy => "date_ddmonyyyy",
            Kind::Integer => "integer",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ordinal" => Ok(Kind::Ordinal),
            "date_iso8601" => Ok(Kind::DateIso8601),
            "date_ddmonyyyy" => Ok(Kind::DateDdMonYyyy),
            "integer" => Ok(Kind::Integer),
            _ => Err(ScanError::UnknownKind(s.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("unknown extractor: {0}")]
    UnknownExtractor(String),
    #[error("unknown hit kind: {0}")]
    UnknownKind(String),
}

/// A located piece of the scanned text.
///
/// `start` and `end` are byte offsets into the haystack; `char_start` and
/// `char_end` are the same positions counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    haystack: &'t str,
    start: usize,
    end: usize,
    char_start: usize,
    char_end: usize,
}

impl<'t> Match<'t> {
    /// `start..end` must lie on character boundaries of `haystack`.
    ///
    /// Counts characters from the beginning of `haystack`; extractors track
    /// character offsets as they advance instead.
    pub fn new(haystack: &'t str, start: usize, end: usize) -> Self {
        let char_start = haystack[..start].chars().count();
        let char_end = char_start + haystack[start..end].chars().count();
        Match { haystack, start, end, char_start, char_end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn as_str(&self) -> &'t str {
        &self.haystack[self.start..self.end]
    }

    pub fn char_start(&self) -> usize {
        self.char_start
    }

    pub fn char_end(&self) -> usize {
        self.char_end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<'t> {
    kind: Kind,
    m: Match<'t>,
}

impl<'t> Hit<'t> {
    pub fn new(kind: Kind, m: Match<'t>) -> Self {
        Hit { kind, m }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn as_match(&self) -> &Match<'t> {
        &self.m
    }

    pub fn as_str(&self) -> &'t str {
        self.m.as_str()
    }

    pub fn into_parts(self) -> (Kind, Match<'t>) {
        (self.kind, self.m)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Filter {
    All,
    NotFloat,
    NotFloatStrictGrouping,
}

/// Lazy iterator over the hits of one extractor call.
///
/// Each call re-scans from the start of the text; dropping it early stops the scan.
#[derive(Debug)]
pub struct Hits<'t> {
    kind: Kind,
    filter: Filter,
    text: &'t str,
    matches: regex::Matches<'static, 't>,
    // last emitted end, in bytes and in characters
    byte_pos: usize,
    char_pos: usize,
}

impl<'t> Hits<'t> {
    fn new(re: &'static regex::Regex, text: &'t str, kind: Kind, filter: Filter) -> Self {
        Hits {
            kind,
            filter,
            text,
            matches: re.find_iter(text),
            byte_pos: 0,
            char_pos: 0,
        }
    }

    fn keep(&self, m: &regex::Match<'t>) -> bool {
        match self.filter {
            Filter::All => true,
            Filter::NotFloat | Filter::NotFloatStrictGrouping
                if patterns::is_float_fragment(self.text, m.start(), m.end()) =>
            {
                log::trace!("skipping {:?} at {}: part of a floating-point number", m.as_str(), m.start());
                false
            }
            Filter::NotFloat => true,
            Filter::NotFloatStrictGrouping => patterns::STRICT_GROUPING.is_match(m.as_str()),
        }
    }
}

impl<'t> Iterator for Hits<'t> {
    type Item = Hit<'t>;

    fn next(&mut self) -> Option<Hit<'t>> {
        loop {
            let m = self.matches.next()?;
            if self.keep(&m) {
                let char_start = self.char_pos + self.text[self.byte_pos..m.start()].chars().count();
                let char_end = char_start + m.as_str().chars().count();
                self.byte_pos = m.end();
                self.char_pos = char_end;
                let found = Match {
                    haystack: self.text,
                    start: m.start(),
                    end: m.end(),
                    char_start,
                    char_end,
                };
                return Some(Hit::new(self.kind, found));
            }
        }
    }
}

pub type ExtractFn = for<'t> fn(&'t str) -> Hits<'t>;

/// Finds tokens that begin with a number and end like 1st or 2nd.
pub fn mixed_ordinals(text: &str) -> Hits<'_> {
    Hits::new(&patterns::MIXED_ORDINAL, text, Kind::Ordinal, Filter::All)
}

/// Finds `YYYY-MM-DD` dates, optionally followed by a time of day.
pub fn dates_iso8601(text: &str) -> Hits<'_> {
    Hits::new(&patterns::DATE_ISO8601, text, Kind::DateIso8601, Filter::All)
}

/// Finds `DD Mon YYYY` dates such as `25 Jul, 2015`.
pub fn dates_ddmonyyyy(text: &str) -> Hits<'_> {
    Hits::new(&patterns::DATE_DDMONYYYY, text, Kind::DateDdMonYyyy, Filter::All)
}

/// Finds integers, including comma-grouped ones, but not the pieces of a
/// floating-point number.
pub fn integers(text: &str) -> Hits<'_> {
    Hits::new(&patterns::INTEGER, text, Kind::Integer, Filter::NotFloat)
}

/// Like [`integers`], but drops numbers whose commas do not separate groups of three.
pub fn strict_integers(text: &str) -> Hits<'_> {
    Hits::new(&patterns::INTEGER, text, Kind::Integer, Filter::NotFloatStrictGrouping)
}

/// Runs each extractor over `text` in turn and chains their hits.
///
/// Hits come out extractor by extractor, not sorted by position.
pub fn scan<'t, I, F, J>(text: &'t str, extractors: I) -> impl Iterator<Item = Hit<'t>>
where
    I: IntoIterator<Item = F>,
    F: FnMut(&'t str) -> J,
    J: IntoIterator<Item = Hit<'t>>,
{
    extractors.into_iter().flat_map(move |mut extract| extract(text))
}

const EXTRACTORS: [(&str, ExtractFn); 5] = [
    ("mixed_ordinals", mixed_ordinals),
    ("dates_iso8601", dates_iso8601),
    ("dates_ddmonyyyy", dates_ddmonyyyy),
    ("integers", integers),
    ("strict_integers", strict_integers),
];

#[derive(Clone, Default)]
pub struct Scanner {
    extractors: Vec<ExtractFn>,
}

impl fmt::Debug for Scanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner").field("extractors", &self.extractors.len()).finish()
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Scanner::new()
            .with(mixed_ordinals)
            .with(dates_iso8601)
            .with(dates_ddmonyyyy)
            .with(integers)
    }

    /// Builds a scanner from extractor names, keeping their order.
    ///
    /// Known names are `mixed_ordinals`, `dates_iso8601`, `dates_ddmonyyyy`,
    /// `integers` and `strict_integers`.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ScanError> {
        let mut scanner = Scanner::new();
        for name in names {
            let name = name.as_ref();
            let (_, extract) = EXTRACTORS
                .iter()
                .find(|(known, _)| *known == name)
                .ok_or_else(|| ScanError::UnknownExtractor(name.to_string()))?;
            scanner = scanner.with(*extract);
        }
        log::debug!("built scanner with {} extractors", scanner.len());
        Ok(scanner)
    }

    pub fn with(mut self, extract: ExtractFn) -> Self {
        self.extractors.push(extract);
        self
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    pub fn scan<'s, 't>(&'s self, text: &'t str) -> impl Iterator<Item = Hit<'t>> + 's
    where
        't: 's,
    {
        scan(text, self.extractors.iter().copied())
    }
}
