// src/services/responder.rs
use std::fmt;

pub const PRICING_REPLY: &str =
    "Our consultation fee is $50. Whitening starts at $200. Do you want to book?";
pub const BOOKING_REPLY: &str =
    "You can book an appointment directly through the Patient Portal dashboard!";
pub const GREETING_REPLY: &str =
    "Hello! I am DentBot 🤖. Ask me about prices, services, or hours.";
pub const HOURS_REPLY: &str = "We are open Mon-Fri from 9 AM to 6 PM.";
pub const THANKS_REPLY: &str =
    "You're welcome! If you have any more questions, feel free to ask.";
pub const SALAM_REPLY: &str = "Wa alaikum salam! How can I assist you today?";
pub const SMALL_TALK_REPLY: &str =
    "Great ! hope your teeth are doing well 😁 ,how can I help you today sir ?";
pub const FALLBACK_REPLY: &str =
    "I'm not sure about that ! Please call our secretary at +212 657152380 for detailed info.";

pub const CLINIC_PHONE: &str = "+212 657152380";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Pricing,
    Booking,
    Greeting,
    Hours,
    Thanks,
    Salam,
    SmallTalk,
    Services,
    Unknown,
}

impl Intent {
    pub fn reply(self) -> &'static str {
        use Intent::*;

        match self {
            Pricing => PRICING_REPLY,
            Booking | Services => BOOKING_REPLY,
            Greeting => GREETING_REPLY,
            Hours => HOURS_REPLY,
            Thanks => THANKS_REPLY,
            Salam => SALAM_REPLY,
            SmallTalk => SMALL_TALK_REPLY,
            Unknown => FALLBACK_REPLY,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One entry of the keyword table: any trigger contained in the lowercased
/// message selects `intent`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub intent: Intent,
    pub triggers: &'static [&'static str],
}

impl Rule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(*t))
    }
}

/// Evaluated top to bottom, first match wins.
pub static RULES: [Rule; 8] = [
    Rule {
        intent: Intent::Pricing,
        triggers: &["price", "cost"],
    },
    Rule {
        intent: Intent::Booking,
        triggers: &["appointment", "book"],
    },
    Rule {
        intent: Intent::Greeting,
        triggers: &["hello", "hi", "hey"],
    },
    Rule {
        intent: Intent::Hours,
        triggers: &["hours", "open", "close", "time"],
    },
    Rule {
        intent: Intent::Thanks,
        triggers: &["thank", "merci"],
    },
    Rule {
        intent: Intent::Salam,
        triggers: &["salam", "salamu alaikum"],
    },
    Rule {
        intent: Intent::SmallTalk,
        triggers: &["how are you", "cv", "wassup"],
    },
    Rule {
        intent: Intent::Services,
        triggers: &["services", "treatments"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Responder {
    rules: &'static [Rule],
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder {
    pub fn new() -> Self {
        Self { rules: &RULES }
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    pub fn classify(&self, msg: &str) -> Intent {
        let msg_lower = msg.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.matches(&msg_lower))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::Unknown)
    }

    pub fn respond(&self, msg: &str) -> &'static str {
        self.classify(msg).reply()
    }
}

pub fn detect_intent(msg: &str) -> Intent {
    Responder::new().classify(msg)
}

pub fn generate_reply(user_msg: &str) -> &'static str {
    detect_intent(user_msg).reply()
}
