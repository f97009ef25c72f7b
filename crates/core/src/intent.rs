use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::models::Intent;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word regex"));

pub const GREETING_WORDS: &[&str] = &["hi", "hii", "hiii", "hello", "hey"];

/// How a rule decides whether it fires on lower-cased input.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", content = "terms", rename_all = "snake_case")]
pub enum Matcher {
    /// The phrase appears anywhere in the text.
    Phrase(&'static str),
    /// Any of the keywords appears anywhere in the text.
    AnyOf(&'static [&'static str]),
    /// Some word token of the text equals one of the words.
    Word(&'static [&'static str]),
}

impl Matcher {
    pub fn matches(&self, lower: &str) -> bool {
        match self {
            Self::Phrase(phrase) => lower.contains(phrase),
            Self::AnyOf(keywords) => contains_any(lower, keywords),
            Self::Word(words) => tokenize_words(lower).any(|token| words.contains(&token)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Rule {
    pub intent: Intent,
    pub matcher: Matcher,
}

const fn rule(intent: Intent, matcher: Matcher) -> Rule {
    Rule { intent, matcher }
}

/// Ordered rule table, evaluated top to bottom. Empty input is handled before
/// the table and `Intent::Fallback` after it.
pub static RULES: &[Rule] = &[
    rule(Intent::Greeting, Matcher::Word(GREETING_WORDS)),
    rule(
        Intent::Help,
        Matcher::AnyOf(&["help", "what can you do", "options"]),
    ),
    rule(Intent::HowAreYou, Matcher::Phrase("how are you")),
    rule(Intent::Thanks, Matcher::AnyOf(&["thank", "thanks", "thx"])),
    rule(Intent::WhoAreYou, Matcher::Phrase("who are you")),
    rule(
        Intent::Admission,
        Matcher::AnyOf(&[
            "admission",
            "admit",
            "apply",
            "application",
            "enroll",
            "enrollment",
            "registration",
            "register",
        ]),
    ),
    rule(
        Intent::Courses,
        Matcher::AnyOf(&[
            "course",
            "courses",
            "branch",
            "branches",
            "program",
            "programs",
            "department",
            "stream",
        ]),
    ),
    rule(
        Intent::Fees,
        Matcher::AnyOf(&[
            "fee",
            "fees",
            "tuition",
            "college fee",
            "semester fee",
            "sem fee",
        ]),
    ),
    rule(
        Intent::Hostel,
        Matcher::AnyOf(&["hostel", "accommodation", "room", "mess", "pg"]),
    ),
    rule(
        Intent::Scholarship,
        Matcher::AnyOf(&["scholarship", "scholarships", "fee waiver", "financial aid"]),
    ),
    rule(
        Intent::Placements,
        Matcher::AnyOf(&[
            "placement",
            "placements",
            "package",
            "salary",
            "job",
            "jobs",
            "campus drive",
            "campus placement",
        ]),
    ),
    rule(
        Intent::Internships,
        Matcher::AnyOf(&["intern", "interns", "internship", "internships"]),
    ),
    rule(
        Intent::Campus,
        Matcher::AnyOf(&["campus", "facility", "facilities", "infrastructure"]),
    ),
    rule(
        Intent::Library,
        Matcher::AnyOf(&["library", "books", "reading room"]),
    ),
    rule(
        Intent::Canteen,
        Matcher::AnyOf(&["canteen", "food", "mess food"]),
    ),
    rule(
        Intent::Timing,
        Matcher::AnyOf(&["timing", "time", "office hours", "working hours"]),
    ),
    rule(
        Intent::Contact,
        Matcher::AnyOf(&["contact", "phone", "email", "number"]),
    ),
];

pub fn normalize_text(input: &str) -> String {
    input.to_lowercase().trim().to_string()
}

pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

pub fn tokenize_words(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}

pub fn is_greeting(text: &str) -> bool {
    Matcher::Word(GREETING_WORDS).matches(&text.to_lowercase())
}

pub fn classify_intent(input: &str) -> Intent {
    if is_blank(input) {
        return Intent::Empty;
    }

    let lower = normalize_text(input);
    RULES
        .iter()
        .find(|rule| rule.matcher.matches(&lower))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Fallback)
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
