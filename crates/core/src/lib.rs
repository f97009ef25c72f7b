pub mod intent;
pub mod models;
pub mod replies;

pub use intent::{classify_intent, is_blank, is_greeting, normalize_text, Matcher, Rule, RULES};
pub use models::*;
pub use replies::{reply_for, respond, FAREWELL};
