//! Parsing of one line of player input into an intent.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Start,
    /// `position` is 0-based; the player types it 1-based.
    Answer { position: usize, value: bool },
    Submit,
    ShowResults,
    Reset,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntentError {
    Empty,
    Unknown(String),
    InvalidPosition(String),
    InvalidAnswer(String),
}

impl fmt::Display for IntentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentError::Empty => write!(f, "Tapez une commande (aide pour la liste)."),
            IntentError::Unknown(raw) => write!(f, "Commande inconnue : {raw}"),
            IntentError::InvalidPosition(raw) => write!(f, "Numéro de question invalide : {raw}"),
            IntentError::InvalidAnswer(raw) => {
                write!(f, "Réponse invalide : {raw} (attendu : v ou f)")
            }
        }
    }
}

impl std::error::Error for IntentError {}

fn parse_answer(raw: &str) -> Result<bool, IntentError> {
    match raw {
        "v" | "vrai" | "true" => Ok(true),
        "f" | "faux" | "false" => Ok(false),
        _ => Err(IntentError::InvalidAnswer(raw.to_owned())),
    }
}

impl Intent {
    /// Parse a line such as `start`, `2 v` or `valider`.
    ///
    /// # Errors
    ///
    /// Returns `IntentError` when the line matches no known command.
    pub fn parse(line: &str) -> Result<Self, IntentError> {
        let lowered = line.trim().to_lowercase();
        let mut words = lowered.split_whitespace();
        let Some(first) = words.next() else {
            return Err(IntentError::Empty);
        };

        if first.starts_with(|c: char| c.is_ascii_digit()) {
            let number: usize = first
                .parse()
                .map_err(|_| IntentError::InvalidPosition(first.to_owned()))?;
            let position = number
                .checked_sub(1)
                .ok_or_else(|| IntentError::InvalidPosition(first.to_owned()))?;
            let raw_answer = words
                .next()
                .ok_or_else(|| IntentError::InvalidAnswer(String::new()))?;
            let value = parse_answer(raw_answer)?;
            return Ok(Self::Answer { position, value });
        }

        match first {
            "start" | "s" | "commencer" | "continuer" | "rejouer" => Ok(Self::Start),
            "valider" => Ok(Self::Submit),
            "resultats" | "résultats" | "r" => Ok(Self::ShowResults),
            "reset" | "reinitialiser" | "réinitialiser" => Ok(Self::Reset),
            "aide" | "?" => Ok(Self::Help),
            "quitter" | "q" => Ok(Self::Quit),
            other => Err(IntentError::Unknown(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_answers_one_based() {
        assert_eq!(
            Intent::parse("2 v").unwrap(),
            Intent::Answer {
                position: 1,
                value: true
            }
        );
        assert_eq!(
            Intent::parse("  5   FAUX ").unwrap(),
            Intent::Answer {
                position: 4,
                value: false
            }
        );
    }

    #[test]
    fn rejects_position_zero_and_bad_answers() {
        assert!(matches!(
            Intent::parse("0 v"),
            Err(IntentError::InvalidPosition(_))
        ));
        assert!(matches!(
            Intent::parse("1 peut-être"),
            Err(IntentError::InvalidAnswer(_))
        ));
        assert!(matches!(Intent::parse("1"), Err(IntentError::InvalidAnswer(_))));
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Intent::parse("Start").unwrap(), Intent::Start);
        assert_eq!(Intent::parse("s").unwrap(), Intent::Start);
        assert_eq!(Intent::parse("valider").unwrap(), Intent::Submit);
        assert_eq!(Intent::parse("résultats").unwrap(), Intent::ShowResults);
        assert_eq!(Intent::parse("reset").unwrap(), Intent::Reset);
        assert_eq!(Intent::parse("q").unwrap(), Intent::Quit);
        assert_eq!(Intent::parse("   ").unwrap_err(), IntentError::Empty);
        assert!(matches!(Intent::parse("dance"), Err(IntentError::Unknown(_))));
    }
}
