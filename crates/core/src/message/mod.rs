//! Greeting Message Composer
//!
//! Renders a deterministic multi-line greeting from a style-keyed template
//! sentence plus optional occasion/mood and signature clauses. Pure string
//! assembly; the literal separators are part of the contract.

use serde::{Deserialize, Serialize};

/// Default style key when the intent carries none (or an empty value)
pub const DEFAULT_STYLE: &str = "warm";

/// Signature name used when the sender is anonymous
const DEFAULT_SIGNATURE: &str = "BloomBox";

/// The closed style-to-sentence table. Unknown styles fall back to `warm`.
const STYLE_SENTENCES: &[(&str, &str)] = &[
    ("warm", "Wrapping you in a soft hug and a little sparkle today."),
    ("romantic", "My heart chose this just for you—gentle, rosy and full of love."),
    ("playful", "A pocketful of confetti and a sprinkle of mischief—just for you!"),
    ("grateful", "Thank you for being the calm in my chaos and the glow in my days."),
    ("poetic", "Like petals on quiet water, may this bring you small, luminous joy."),
];

/// Structured request for a composed greeting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageIntent {
    /// Recipient name
    pub to: Option<String>,
    /// Sender name
    pub from_name: Option<String>,
    pub mood: Option<String>,
    pub occasion: Option<String>,
    /// warm | romantic | playful | grateful | poetic
    pub style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedMessage {
    pub message: String,
}

fn style_sentence(style: &str) -> &'static str {
    STYLE_SENTENCES
        .iter()
        .find(|(key, _)| *key == style)
        .or_else(|| STYLE_SENTENCES.iter().find(|(key, _)| *key == DEFAULT_STYLE))
        .map(|(_, sentence)| *sentence)
        .unwrap_or_default()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Render the greeting. Same intent always yields the same string.
pub fn compose(intent: &MessageIntent) -> ComposedMessage {
    let greeting = match non_empty(intent.to.as_deref()) {
        Some(to) => format!("Dear {to},"),
        None => "Hey love,".to_owned(),
    };

    let style = non_empty(intent.style.as_deref())
        .map(str::to_lowercase)
        .unwrap_or_else(|| DEFAULT_STYLE.to_owned());
    let sentence = style_sentence(&style);

    let occasion = intent.occasion.as_deref().unwrap_or_default();
    let mood = intent.mood.as_deref().unwrap_or_default();
    // Either field alone triggers the clause; both interpolate as given.
    let context_clause = if !occasion.is_empty() || !mood.is_empty() {
        format!(" For your {occasion} I wished for {mood} moments.")
    } else {
        String::new()
    };

    let signature_name =
        non_empty(intent.from_name.as_deref()).unwrap_or(DEFAULT_SIGNATURE);

    let message = format!("{greeting}\n{sentence}{context_clause}\n\nWith love,\n{signature_name}");
    ComposedMessage { message }
}

#[cfg(test)]
mod tests {
    use super::{compose, MessageIntent};

    #[test]
    fn full_intent_renders_every_clause() {
        let intent = MessageIntent {
            to: Some("Mia".to_owned()),
            from_name: Some("Noah".to_owned()),
            mood: Some("happy".to_owned()),
            occasion: Some("birthday".to_owned()),
            style: Some("playful".to_owned()),
        };

        assert_eq!(
            compose(&intent).message,
            "Dear Mia,\n\
             A pocketful of confetti and a sprinkle of mischief—just for you! \
             For your birthday I wished for happy moments.\n\
             \nWith love,\nNoah"
        );
    }

    #[test]
    fn empty_intent_uses_all_defaults() {
        let rendered = compose(&MessageIntent::default()).message;

        assert_eq!(
            rendered,
            "Hey love,\nWrapping you in a soft hug and a little sparkle today.\n\nWith love,\nBloomBox"
        );
    }

    #[test]
    fn unknown_style_falls_back_to_warm_sentence() {
        let unknown = MessageIntent {
            to: Some("Mia".to_owned()),
            style: Some("unknown-style".to_owned()),
            ..MessageIntent::default()
        };
        let warm = MessageIntent {
            to: Some("Mia".to_owned()),
            style: Some("warm".to_owned()),
            ..MessageIntent::default()
        };

        assert_eq!(compose(&unknown), compose(&warm));
    }

    #[test]
    fn style_key_is_case_folded() {
        let upper = MessageIntent { style: Some("POETIC".to_owned()), ..MessageIntent::default() };
        let lower = MessageIntent { style: Some("poetic".to_owned()), ..MessageIntent::default() };

        assert_eq!(compose(&upper), compose(&lower));
    }

    #[test]
    fn lone_mood_still_triggers_the_context_clause() {
        let intent = MessageIntent { mood: Some("calm".to_owned()), ..MessageIntent::default() };
        let rendered = compose(&intent).message;

        assert!(rendered.contains(" For your  I wished for calm moments."));
    }

    #[test]
    fn compose_is_idempotent() {
        let intent = MessageIntent {
            to: Some("Ava".to_owned()),
            from_name: Some("Liam".to_owned()),
            occasion: Some("anniversary".to_owned()),
            style: Some("grateful".to_owned()),
            ..MessageIntent::default()
        };

        assert_eq!(compose(&intent), compose(&intent));
    }
}
