use campus_core::{classify_intent, reply_for, respond, Intent};

#[test]
fn whitespace_only_asks_for_more() {
    for input in ["", " ", "\t", "   \n  "] {
        assert_eq!(respond(input), reply_for(Intent::Empty), "input {input:?}");
    }
    assert_eq!(
        respond(""),
        "Please type something about admission, fees, hostel, courses, etc."
    );
}

#[test]
fn standalone_greetings() {
    for input in ["hi", "hi there", "HELLO!", "hey, you", "hiii", "Hii :)"] {
        assert_eq!(classify_intent(input), Intent::Greeting, "input {input:?}");
    }
}

#[test]
fn greeting_inside_word_falls_through() {
    assert_eq!(classify_intent("scholarship"), Intent::Scholarship);
    assert_eq!(respond("scholarship"), reply_for(Intent::Scholarship));
    assert_eq!(classify_intent("this"), Intent::Fallback);
}

#[test]
fn greeting_precedes_topics() {
    assert_eq!(classify_intent("hi, tell me about fees"), Intent::Greeting);
    assert_eq!(classify_intent("hello, I need help"), Intent::Greeting);
}

#[test]
fn keyword_checks_are_case_insensitive_substrings() {
    assert_eq!(classify_intent("ADMISSION please"), Intent::Admission);
    assert_eq!(classify_intent("i want to apply"), Intent::Admission);
    assert_eq!(classify_intent("Semester Fee details"), Intent::Fees);
    assert_eq!(classify_intent("Where is the LIBRARY"), Intent::Library);
}

#[test]
fn each_topic_is_reachable() {
    let cases = [
        ("what can you do", Intent::Help),
        ("how are you", Intent::HowAreYou),
        ("thank you", Intent::Thanks),
        ("who are you", Intent::WhoAreYou),
        ("registration dates", Intent::Admission),
        ("which branches exist", Intent::Courses),
        ("tuition cost", Intent::Fees),
        ("accommodation", Intent::Hostel),
        ("financial aid", Intent::Scholarship),
        ("average salary", Intent::Placements),
        ("summer internship", Intent::Internships),
        ("infrastructure", Intent::Campus),
        ("library", Intent::Library),
        ("canteen", Intent::Canteen),
        ("office hours", Intent::Timing),
        ("email address", Intent::Contact),
    ];

    for (input, expected) in cases {
        assert_eq!(classify_intent(input), expected, "input {input:?}");
    }
}

#[test]
fn unmatched_input_gets_fallback() {
    assert_eq!(respond("purple elephant"), reply_for(Intent::Fallback));
}
