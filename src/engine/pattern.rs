// src/engine/pattern.rs
//! Pattern-mode helpers: anchor token regex and source date patterns.
//!
//! A date pattern is written either strftime-style (`%d.%m.%Y`) or with
//! placeholder tokens (`DD.MM.YYYY`). Both compile to the same pieces, which give
//! an anchored regex (find the leading date token) and a chrono format (parse it).

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use crate::config::consts::CANONICAL_DATE_FORMAT;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid token regex: {0}")]
    Regex(#[from] regex::Error),

    #[error("unsupported date field '{token}' in '{pattern}'")]
    UnsupportedDateField { pattern: String, token: String },

    #[error("date format '{pattern}' has no {field} field")]
    MissingDateField { pattern: String, field: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Piece {
    Day,
    Month,
    MonthAbbr,
    MonthFull,
    Year4,
    Year2,
    Lit(char),
}

impl Piece {
    fn regex(self) -> String {
        match self {
            Piece::Day | Piece::Month => s!(r"\d{1,2}"),
            Piece::MonthAbbr => s!(r"[A-Za-z]{3}"),
            Piece::MonthFull => s!(r"[A-Za-z]+"),
            Piece::Year4 => s!(r"\d{4}"),
            Piece::Year2 => s!(r"\d{2}"),
            Piece::Lit(c) if c.is_whitespace() => s!(r"\s+"),
            Piece::Lit(c) => regex::escape(c.encode_utf8(&mut [0u8; 4])),
        }
    }

    fn strftime(self) -> String {
        match self {
            Piece::Day => s!("%d"),
            Piece::Month => s!("%m"),
            Piece::MonthAbbr => s!("%b"),
            Piece::MonthFull => s!("%B"),
            Piece::Year4 => s!("%Y"),
            Piece::Year2 => s!("%y"),
            Piece::Lit('%') => s!("%%"),
            Piece::Lit(c) => c.to_string(),
        }
    }
}

/// Source date pattern: finds a date at the start of a text and rewrites it as `YYYY-MM-DD`.
#[derive(Clone, Debug)]
pub struct DatePattern {
    chrono_fmt: String,
    leading: Regex,
}

impl DatePattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let pieces = if pattern.contains('%') {
            parse_strftime(pattern)?
        } else {
            parse_tokens(pattern)?
        };

        let has = |f: fn(&Piece) -> bool| pieces.iter().any(f);
        let missing = |field| PatternError::MissingDateField { pattern: pattern.to_string(), field };
        if !has(|p| matches!(p, Piece::Day)) { return Err(missing("day")); }
        if !has(|p| matches!(p, Piece::Month | Piece::MonthAbbr | Piece::MonthFull)) { return Err(missing("month")); }
        if !has(|p| matches!(p, Piece::Year4 | Piece::Year2)) { return Err(missing("year")); }

        let mut re = s!("^(?:");
        let mut chrono_fmt = s!();
        for p in &pieces {
            re.push_str(&p.regex());
            chrono_fmt.push_str(&p.strftime());
        }
        re.push(')');

        Ok(Self { chrono_fmt, leading: Regex::new(&re)? })
    }

    /// Canonical date for the token at the very start of `text`, if there is one.
    /// A token shaped like a date that is not a real calendar day gives `None`.
    pub fn normalize_leading(&self, text: &str) -> Option<String> {
        let m = self.leading.find(text.trim_start())?;
        let date = NaiveDate::parse_from_str(m.as_str(), &self.chrono_fmt).ok()?;
        Some(date.format(CANONICAL_DATE_FORMAT).to_string())
    }
}

fn parse_strftime(pattern: &str) -> Result<Vec<Piece>, PatternError> {
    let mut out = Vec::new();
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' { out.push(Piece::Lit(ch)); continue; }
        let piece = match chars.next() {
            Some('d') => Piece::Day,
            Some('m') => Piece::Month,
            Some('b') => Piece::MonthAbbr,
            Some('B') => Piece::MonthFull,
            Some('Y') => Piece::Year4,
            Some('y') => Piece::Year2,
            Some('%') => Piece::Lit('%'),
            other => {
                return Err(PatternError::UnsupportedDateField {
                    pattern: pattern.to_string(),
                    token: other.map_or_else(|| s!("%"), |c| format!("%{c}")),
                });
            }
        };
        out.push(piece);
    }
    Ok(out)
}

/// Longest tokens first so `MMMM` never reads as two `MM`.
const TOKENS: &[(&str, Piece)] = &[
    ("YYYY", Piece::Year4),
    ("MMMM", Piece::MonthFull),
    ("MMM", Piece::MonthAbbr),
    ("YY", Piece::Year2),
    ("MM", Piece::Month),
    ("DD", Piece::Day),
];

fn parse_tokens(pattern: &str) -> Result<Vec<Piece>, PatternError> {
    let mut out = Vec::new();
    let mut rest = pattern;
    'scan: while let Some(ch) = rest.chars().next() {
        for (tok, piece) in TOKENS {
            if let Some(tail) = rest.strip_prefix(tok) {
                out.push(*piece);
                rest = tail;
                continue 'scan;
            }
        }
        if ch.is_ascii_alphabetic() {
            let run: String = rest.chars().take_while(|c| *c == ch).collect();
            return Err(PatternError::UnsupportedDateField { pattern: pattern.to_string(), token: run });
        }
        out.push(Piece::Lit(ch));
        rest = &rest[ch.len_utf8()..];
    }
    Ok(out)
}

/// Token regex applied to anchor text. A capture group named `token` wins
/// over the whole match.
#[derive(Clone, Debug)]
pub struct TokenPattern {
    re: Regex,
    has_token_group: bool,
}

impl TokenPattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let re = Regex::new(pattern)?;
        let has_token_group = re.capture_names().flatten().any(|n| n == "token");
        Ok(Self { re, has_token_group })
    }

    pub fn find(&self, text: &str) -> Option<String> {
        let caps = self.re.captures(text)?;
        let m = if self.has_token_group { caps.name("token")? } else { caps.get(0)? };
        Some(m.as_str().to_string())
    }
}
