use std::fmt;

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static RECORD_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})\] (You|Chatbot): (.*)$")
        .expect("valid record header regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Empty,
    Greeting,
    Help,
    HowAreYou,
    Thanks,
    WhoAreYou,
    Admission,
    Courses,
    Fees,
    Hostel,
    Scholarship,
    Placements,
    Internships,
    Campus,
    Library,
    Canteen,
    Timing,
    Contact,
    Fallback,
}

impl Intent {
    pub fn as_code(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Greeting => "greeting",
            Self::Help => "help",
            Self::HowAreYou => "how_are_you",
            Self::Thanks => "thanks",
            Self::WhoAreYou => "who_are_you",
            Self::Admission => "admission",
            Self::Courses => "courses",
            Self::Fees => "fees",
            Self::Hostel => "hostel",
            Self::Scholarship => "scholarship",
            Self::Placements => "placements",
            Self::Internships => "internships",
            Self::Campus => "campus",
            Self::Library => "library",
            Self::Canteen => "canteen",
            Self::Timing => "timing",
            Self::Contact => "contact",
            Self::Fallback => "fallback",
        }
    }

    /// Domain topics are the college-information intents, as opposed to
    /// small talk and the empty/fallback cases.
    pub fn is_domain_topic(self) -> bool {
        matches!(
            self,
            Self::Admission
                | Self::Courses
                | Self::Fees
                | Self::Hostel
                | Self::Scholarship
                | Self::Placements
                | Self::Internships
                | Self::Campus
                | Self::Library
                | Self::Canteen
                | Self::Timing
                | Self::Contact
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    You,
    Chatbot,
}

impl Speaker {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::You => "You",
            Self::Chatbot => "Chatbot",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "You" => Some(Self::You),
            "Chatbot" => Some(Self::Chatbot),
            _ => None,
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One exchange line of the chat history: `[timestamp] Speaker: text`.
///
/// Bot replies may contain newlines; they are kept verbatim, so a record can
/// span several physical lines of the history file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub at: NaiveDateTime,
    pub speaker: Speaker,
    pub text: String,
}

impl LogRecord {
    pub fn new(at: NaiveDateTime, speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            at,
            speaker,
            text: text.into(),
        }
    }

    /// Parses a single record header line. Continuation lines of a
    /// multi-line reply return `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let captures = RECORD_HEADER.captures(line)?;
        let at = NaiveDateTime::parse_from_str(&captures[1], TIMESTAMP_FORMAT).ok()?;
        let speaker = Speaker::parse(&captures[2])?;

        Some(Self::new(at, speaker, &captures[3]))
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.at.format(TIMESTAMP_FORMAT),
            self.speaker,
            self.text
        )
    }
}

/// Rebuilds records from history file contents. Lines that do not start a
/// record are appended to the previous one; anything before the first record
/// header is skipped.
pub fn parse_records(contents: &str) -> Vec<LogRecord> {
    let mut records: Vec<LogRecord> = Vec::new();

    for line in contents.lines() {
        if let Some(record) = LogRecord::parse_line(line) {
            records.push(record);
        } else if let Some(last) = records.last_mut() {
            last.text.push('\n');
            last.text.push_str(line);
        }
    }

    records
}
