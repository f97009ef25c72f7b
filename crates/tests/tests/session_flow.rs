use std::fs;

use campus_agents::ChatSession;
use campus_core::{respond, Speaker, FAREWELL};
use campus_observability::AppMetrics;
use campus_storage::{ChatHistory, FileHistory, History};
use campus_tests::{record_header, temp_history_path};

#[test]
fn transcript_is_appended_to_file() {
    let (_dir, path) = temp_history_path();
    let session = ChatSession::new(History::file(&path), AppMetrics::shared());
    let mut console = Vec::new();

    session
        .run("hostel\nEXIT\nnever read\n".as_bytes(), &mut console)
        .unwrap();

    let records = FileHistory::new(&path).load().unwrap();
    let texts = records
        .iter()
        .map(|r| (r.speaker, r.text.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        texts,
        vec![
            (Speaker::You, "hostel"),
            (Speaker::Chatbot, respond("hostel")),
            (Speaker::You, "EXIT"),
            (Speaker::Chatbot, FAREWELL),
        ]
    );
    assert_eq!(records[0].at, records[1].at);
    assert_eq!(records[2].at, records[3].at);

    let raw = fs::read_to_string(&path).unwrap();
    let header = record_header();
    assert_eq!(raw.lines().filter(|line| header.is_match(line)).count(), 4);

    let console = String::from_utf8(console).unwrap();
    assert!(console.contains(&format!("Chatbot: {FAREWELL}\n")));
    assert!(!console.contains("never read"));
}

#[test]
fn history_appends_across_sessions() {
    let (_dir, path) = temp_history_path();

    for input in ["hi\nquit\n", "thanks\nquit\n"] {
        let session = ChatSession::new(History::file(&path), AppMetrics::shared());
        session.run(input.as_bytes(), Vec::new()).unwrap();
    }

    let records = FileHistory::new(&path).load().unwrap();
    assert_eq!(records.len(), 8);
    assert_eq!(records[4].text, "thanks");
    assert_eq!(records[5].text, "You're welcome! 😊");
}

#[test]
fn unwritable_history_does_not_stop_the_chat() {
    let (dir, _path) = temp_history_path();
    // A directory cannot be opened for appending.
    let session = ChatSession::new(History::file(dir.path()), AppMetrics::shared());
    let mut console = Vec::new();

    let snapshot = session
        .run("fees\nlibrary\nexit\n".as_bytes(), &mut console)
        .unwrap();

    assert_eq!(snapshot.turns_total, 2);
    assert_eq!(snapshot.domain_replies_total, 2);
    assert_eq!(snapshot.history_failures_total, 6);

    let console = String::from_utf8(console).unwrap();
    assert!(console.contains(&format!("Chatbot: {}\n", respond("library"))));
    assert!(console.ends_with(&format!("Chatbot: {FAREWELL}\n")));
}

#[test]
fn memory_history_keeps_turn_order() {
    let session = ChatSession::new(History::memory(), AppMetrics::shared());
    session
        .run("who are you\n\nquit\n".as_bytes(), Vec::new())
        .unwrap();

    let records = session.history().load().unwrap();
    let speakers = records.iter().map(|r| r.speaker).collect::<Vec<_>>();
    assert_eq!(
        speakers,
        vec![
            Speaker::You,
            Speaker::Chatbot,
            Speaker::You,
            Speaker::Chatbot,
            Speaker::You,
            Speaker::Chatbot,
        ]
    );
    assert_eq!(records[2].text, "");
    assert_eq!(records[3].text, respond(""));
}
