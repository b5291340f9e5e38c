//! Intent classification
//!
//! Case-insensitive keyword containment over a fixed rule table,
//! evaluated in priority order; the first matching rule wins. "1" before
//! "goal" means a message containing both resolves to the forecast
//! intent.

use std::fmt;

/// A discrete conversational goal inferred from inbound text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Hi/hello/start; the reply depends on whether the sender is known
    Greeting,
    /// Earnings analysis and forecast
    Forecast,
    /// Savings goal menu
    Goals,
    /// Emergency loan options
    Emergency,
    /// GigScore breakdown
    Credit,
    /// Financial tips
    Tips,
    /// Return to the main menu
    MainMenu,
    /// Anything unrecognized
    Fallback,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Forecast => "forecast",
            Self::Goals => "goals",
            Self::Emergency => "emergency",
            Self::Credit => "credit",
            Self::Tips => "tips",
            Self::MainMenu => "main_menu",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The classification table. Order is the priority order; first match
/// wins.
const RULES: &[(Intent, &[&str])] = &[
    (Intent::Greeting, &["hi", "hello", "start"]),
    (Intent::Forecast, &["1", "forecast", "earnings"]),
    (Intent::Goals, &["2", "goal"]),
    (Intent::Emergency, &["3", "emergency", "loan"]),
    (Intent::Credit, &["4", "credit", "score"]),
    (Intent::Tips, &["5", "tip", "advice"]),
    (Intent::MainMenu, &["menu", "back", "main"]),
];

/// Classify an inbound message into exactly one intent
pub fn classify(message: &str) -> Intent {
    let message = message.to_lowercase();

    for (intent, keywords) in RULES {
        if keywords.iter().any(|kw| message.contains(kw)) {
            return *intent;
        }
    }

    Intent::Fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_keywords() {
        assert_eq!(classify("hi"), Intent::Greeting);
        assert_eq!(classify("Hello there"), Intent::Greeting);
        assert_eq!(classify("START"), Intent::Greeting);
    }

    #[test]
    fn test_menu_numbers() {
        assert_eq!(classify("1"), Intent::Forecast);
        assert_eq!(classify("2"), Intent::Goals);
        assert_eq!(classify("3"), Intent::Emergency);
        assert_eq!(classify("4"), Intent::Credit);
        assert_eq!(classify("5"), Intent::Tips);
    }

    #[test]
    fn test_keyword_aliases() {
        assert_eq!(classify("show my earnings"), Intent::Forecast);
        assert_eq!(classify("set a goal"), Intent::Goals);
        assert_eq!(classify("need a loan"), Intent::Emergency);
        assert_eq!(classify("credit please"), Intent::Credit);
        assert_eq!(classify("any advice?"), Intent::Tips);
        assert_eq!(classify("menu"), Intent::MainMenu);
        assert_eq!(classify("take me back"), Intent::MainMenu);
    }

    #[test]
    fn test_priority_order_first_match_wins() {
        // Both "1" and "goal" present: forecast outranks goals
        assert_eq!(classify("1 goal"), Intent::Forecast);
        // Greeting outranks everything
        assert_eq!(classify("hi, my credit score?"), Intent::Greeting);
        // "loan" outranks "score" by rule order
        assert_eq!(classify("loan score"), Intent::Emergency);
    }

    #[test]
    fn test_containment_not_word_match() {
        // Substring semantics, as the keyword table is defined
        assert_eq!(classify("this is fine"), Intent::Greeting); // "this" contains "hi"
        assert_eq!(classify("what a backstory"), Intent::MainMenu);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("FORECAST"), Intent::Forecast);
        assert_eq!(classify("MeNu"), Intent::MainMenu);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(classify("qwerty"), Intent::Fallback);
        assert_eq!(classify(""), Intent::Fallback);
        assert_eq!(classify("🍟"), Intent::Fallback);
    }
}
