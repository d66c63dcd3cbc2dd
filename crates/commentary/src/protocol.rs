//! JSON wire format for commentary providers.
//!
//! Requests go out as one JSON object; replies come back as one JSON object:
//!
//! ```text
//! -> {"kind":"commentary","event":"eat","score":5}
//! <- {"text":"Hungry hungry!","mood":"excited"}
//!
//! -> {"kind":"debrief","score":12,"moves":140,"duration_secs":38}
//! <- {"analysis":"...","scoreRating":"Neon Novice","tips":["...","...","..."]}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CommentaryError;
use crate::types::{Commentary, Debrief, GameEvent, GameStats, Mood};

/// Request sent to a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Request {
    Commentary {
        event: String,
        score: u32,
    },
    Debrief {
        score: u32,
        moves: u32,
        duration_secs: u64,
    },
}

impl Request {
    pub fn commentary(event: GameEvent, score: u32) -> Self {
        Request::Commentary {
            event: event.as_str().to_string(),
            score,
        }
    }

    pub fn debrief(stats: GameStats) -> Self {
        Request::Debrief {
            score: stats.score,
            moves: stats.moves,
            duration_secs: stats.duration_secs,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CommentaryWire {
    #[serde(default)]
    text: String,
    #[serde(default)]
    mood: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DebriefWire {
    #[serde(default)]
    analysis: String,
    #[serde(default, alias = "score_rating")]
    score_rating: String,
    #[serde(default)]
    tips: Vec<String>,
}

/// Parse a commentary reply. Unknown moods read as neutral.
pub fn parse_commentary(raw: &str) -> Result<Commentary, CommentaryError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CommentaryError::Empty);
    }
    let wire: CommentaryWire = serde_json::from_str(raw)?;
    let text = wire.text.trim();
    if text.is_empty() {
        return Err(CommentaryError::Empty);
    }
    Ok(Commentary::new(text, Mood::from_str(&wire.mood)))
}

/// Parse a debrief reply.
pub fn parse_debrief(raw: &str) -> Result<Debrief, CommentaryError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CommentaryError::Empty);
    }
    let wire: DebriefWire = serde_json::from_str(raw)?;
    if wire.analysis.trim().is_empty() && wire.score_rating.trim().is_empty() {
        return Err(CommentaryError::Empty);
    }
    Ok(Debrief {
        analysis: wire.analysis,
        score_rating: wire.score_rating,
        tips: wire.tips,
    })
}

/// Line shown when the provider answers with nothing.
pub fn empty_fallback() -> Commentary {
    Commentary::new("System online.", Mood::Neutral)
}

/// Line shown when the provider fails.
pub fn error_fallback() -> Commentary {
    Commentary::new("Connection unstable...", Mood::Neutral)
}

/// Map a provider result to the line that gets displayed.
pub fn commentary_or_fallback(result: Result<Commentary, CommentaryError>) -> Commentary {
    match result {
        Ok(line) => line,
        Err(CommentaryError::Empty) => empty_fallback(),
        Err(_) => error_fallback(),
    }
}

/// Report shown when no debrief could be produced.
pub fn debrief_fallback() -> Debrief {
    Debrief {
        analysis: "Data corruption detected in sector 7. Unable to compile full tactical report."
            .to_string(),
        score_rating: "Unknown Entity".to_string(),
        tips: vec![
            "Check network connection.".to_string(),
            "Try again.".to_string(),
            "Stay alert.".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commentary() {
        let c = parse_commentary(r#"{"text":"Feast mode!","mood":"excited"}"#).unwrap();
        assert_eq!(c, Commentary::new("Feast mode!", Mood::Excited));

        let c = parse_commentary(r#"{"text":"hm","mood":"grumpy"}"#).unwrap();
        assert_eq!(c.mood, Mood::Neutral);
    }

    #[test]
    fn test_parse_commentary_errors() {
        assert!(matches!(parse_commentary("   "), Err(CommentaryError::Empty)));
        assert!(matches!(
            parse_commentary(r#"{"text":"","mood":"excited"}"#),
            Err(CommentaryError::Empty)
        ));
        assert!(matches!(
            parse_commentary("not json"),
            Err(CommentaryError::Malformed(_))
        ));
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(
            commentary_or_fallback(Err(CommentaryError::Empty)).text,
            "System online."
        );
        let line = commentary_or_fallback(Err(CommentaryError::Timeout(
            std::time::Duration::from_secs(1),
        )));
        assert_eq!(line, Commentary::new("Connection unstable...", Mood::Neutral));

        let report = debrief_fallback();
        assert_eq!(report.score_rating, "Unknown Entity");
        assert_eq!(report.tips.len(), 3);
    }

    #[test]
    fn test_parse_debrief_accepts_both_rating_spellings() {
        let a = parse_debrief(r#"{"analysis":"ok","scoreRating":"Cyber Warlord","tips":["a"]}"#)
            .unwrap();
        assert_eq!(a.score_rating, "Cyber Warlord");
        let b = parse_debrief(r#"{"analysis":"ok","score_rating":"Neon Novice"}"#).unwrap();
        assert_eq!(b.score_rating, "Neon Novice");
        assert!(b.tips.is_empty());
    }

    #[test]
    fn test_request_json_shape() {
        let json = serde_json::to_string(&Request::commentary(GameEvent::Eat, 5)).unwrap();
        assert_eq!(json, r#"{"kind":"commentary","event":"eat","score":5}"#);
    }
}
