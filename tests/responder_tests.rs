use dentbot_backend::services::responder::{
    BOOKING_REPLY, CLINIC_PHONE, FALLBACK_REPLY, GREETING_REPLY, HOURS_REPLY, Intent,
    PRICING_REPLY, Responder, SALAM_REPLY, SMALL_TALK_REPLY, THANKS_REPLY, detect_intent,
    generate_reply,
};

#[test]
fn test_detect_intent() {
    assert_eq!(detect_intent("How much does a cleaning cost?"), Intent::Pricing);
    assert_eq!(detect_intent("I need an appointment"), Intent::Booking);
    assert_eq!(detect_intent("hello"), Intent::Greeting);
    assert_eq!(detect_intent("When do you open?"), Intent::Hours);
    assert_eq!(detect_intent("thank you"), Intent::Thanks);
    assert_eq!(detect_intent("salam"), Intent::Salam);
    assert_eq!(detect_intent("wassup"), Intent::SmallTalk);
    assert_eq!(detect_intent("list your services"), Intent::Services);
    assert_eq!(detect_intent("banana"), Intent::Unknown);
}

#[test]
fn test_pricing_keywords() {
    assert_eq!(generate_reply("what is the price"), PRICING_REPLY);
    assert_eq!(generate_reply("cost of whitening"), PRICING_REPLY);
    assert!(generate_reply("price").contains("$50"));
}

#[test]
fn test_case_insensitive() {
    assert_eq!(generate_reply("PRICE"), generate_reply("price"));
    assert_eq!(generate_reply("HeLLo"), GREETING_REPLY);
    assert_eq!(generate_reply("MERCI"), THANKS_REPLY);
}

#[test]
fn test_first_match_wins() {
    assert_eq!(generate_reply("hi, what's the price?"), PRICING_REPLY);
    // booking outranks greeting and hours
    assert_eq!(generate_reply("hey, can I book for tomorrow at open time?"), BOOKING_REPLY);
    // greeting outranks hours
    assert_eq!(generate_reply("hey, what time do you close"), GREETING_REPLY);
}

#[test]
fn test_substring_matching_is_loose() {
    // "hi" inside "which"
    assert_eq!(detect_intent("which treatments"), Intent::Greeting);
    // "time" inside "sometimes"
    assert_eq!(detect_intent("sometimes my gum bleeds"), Intent::Hours);
}

#[test]
fn test_remaining_replies() {
    assert_eq!(generate_reply("What are your hours"), HOURS_REPLY);
    assert_eq!(generate_reply("salamu alaikum"), SALAM_REPLY);
    assert_eq!(generate_reply("how are you"), SMALL_TALK_REPLY);
    assert_eq!(generate_reply("cv ?"), SMALL_TALK_REPLY);
    assert_eq!(generate_reply("treatments"), BOOKING_REPLY);
    assert_eq!(generate_reply("services"), generate_reply("book"));
}

#[test]
fn test_fallback() {
    assert_eq!(generate_reply(""), FALLBACK_REPLY);
    assert_eq!(generate_reply("banana"), FALLBACK_REPLY);
    assert!(generate_reply("banana").contains(CLINIC_PHONE));
}

#[test]
fn test_responder_matches_free_functions() {
    let responder = Responder::default();
    for msg in ["price", "book", "hello", "open", "thank", "salam", "cv", "services", "xyz"] {
        assert_eq!(responder.classify(msg), detect_intent(msg));
        assert_eq!(responder.respond(msg), generate_reply(msg));
    }
}
