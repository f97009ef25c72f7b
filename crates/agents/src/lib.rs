use std::io::{self, BufRead, Write};
use std::sync::Arc;

use campus_core::{classify_intent, reply_for, Intent, LogRecord, Speaker, FAREWELL};
use campus_observability::{AppMetrics, MetricsSnapshot};
use campus_storage::ChatHistory;
use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, instrument};
use uuid::Uuid;

pub const BANNER: &str = "=== PROJECT 1 CHATBOT v1.1 (Syntecx) ===";

const INTRO: &[&str] = &[
    "Hi! I am your PROJECT 1 rule-based college info chatbot.",
    "Type 'exit' to end the chat.",
];

const PROMPT: &str = "You: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Reply(Intent),
    Farewell,
}

pub fn is_exit_command(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "exit" | "quit")
}

/// Interactive read/respond/log loop. One instance per conversation; history
/// writes are best-effort and never end the session.
pub struct ChatSession<H>
where
    H: ChatHistory,
{
    session_id: String,
    history: H,
    metrics: Arc<AppMetrics>,
}

impl<H> ChatSession<H>
where
    H: ChatHistory,
{
    pub fn new(history: H, metrics: Arc<AppMetrics>) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            history,
            metrics,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn greet<W: Write>(&self, output: &mut W) -> io::Result<()> {
        for line in INTRO {
            writeln!(output, "Chatbot: {line}")?;
        }
        writeln!(output)
    }

    /// Runs until an exit sentinel or end of input.
    #[instrument(skip_all, fields(session_id = %self.session_id))]
    pub fn run<R, W>(&self, mut input: R, mut output: W) -> io::Result<MetricsSnapshot>
    where
        R: BufRead,
        W: Write,
    {
        self.greet(&mut output)?;

        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                info!("input closed, ending session");
                break;
            }

            let line = line.trim_end_matches(['\r', '\n']);
            let at = Local::now().naive_local();

            if self.turn(line, at, &mut output)? == TurnOutcome::Farewell {
                break;
            }
        }

        let snapshot = self.metrics.snapshot();
        info!(
            turns = snapshot.turns_total,
            fallbacks = snapshot.fallback_total,
            history_failures = snapshot.history_failures_total,
            "chat session finished"
        );
        Ok(snapshot)
    }

    /// Handles one input line: both records of a turn carry the same `at`.
    pub fn turn<W: Write>(
        &self,
        line: &str,
        at: NaiveDateTime,
        output: &mut W,
    ) -> io::Result<TurnOutcome> {
        if is_exit_command(line) {
            writeln!(output, "Chatbot: {FAREWELL}")?;
            self.record(at, Speaker::You, line);
            self.record(at, Speaker::Chatbot, FAREWELL);
            return Ok(TurnOutcome::Farewell);
        }

        self.record(at, Speaker::You, line);

        let intent = classify_intent(line);
        let reply = reply_for(intent);
        self.metrics.inc_turn();
        if intent == Intent::Fallback {
            self.metrics.inc_fallback();
        } else if intent.is_domain_topic() {
            self.metrics.inc_domain_reply();
        }

        writeln!(output, "Chatbot: {reply}")?;
        self.record(at, Speaker::Chatbot, reply);

        info!(intent = %intent.as_code(), "turn answered");
        Ok(TurnOutcome::Reply(intent))
    }

    fn record(&self, at: NaiveDateTime, speaker: Speaker, text: &str) {
        if let Err(err) = self.history.append(&LogRecord::new(at, speaker, text)) {
            self.metrics.inc_history_failure();
            debug!(error = %err, "chat history write skipped");
        }
    }
}
