//! Line-oriented terminal front end.
//!
//! `TerminalApp` reads one intent per line, forwards it to the service and
//! redraws from the service views. It never mutates quiz state itself.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use quiz_core::QuizError;
use quiz_core::model::SessionError;
use services::{QuizService, QuizServiceError, StartOutcome};

use crate::intent::Intent;
use crate::theme::Theme;
use crate::views::{render_help, render_screen};

const RESET_PROMPT: &str =
    "Voulez-vous vraiment réinitialiser toute votre progression ? (oui/non)";

/// What the loop should do after an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Redraw,
    Message(String),
    Quit,
}

#[derive(Debug)]
pub struct TerminalApp {
    service: QuizService,
    theme: Theme,
    pending_reset: bool,
}

fn describe(err: &QuizServiceError) -> String {
    match err {
        QuizServiceError::Quiz(QuizError::NoActiveSession) => {
            "Aucune partie en cours. Tapez start pour commencer.".to_owned()
        }
        QuizServiceError::Quiz(QuizError::SessionInProgress) => {
            "Partie en cours : répondez puis validez avant de voir les résultats.".to_owned()
        }
        QuizServiceError::Quiz(QuizError::Session(SessionError::Incomplete { unanswered })) => {
            format!("Répondez à toutes les questions avant de valider ({unanswered} restante(s)).")
        }
        QuizServiceError::Quiz(QuizError::Session(SessionError::PositionOutOfRange {
            len, ..
        })) => format!("Choisissez une question entre 1 et {len}."),
        QuizServiceError::Quiz(QuizError::Session(SessionError::AlreadyCompleted)) => {
            "Cette partie est déjà validée.".to_owned()
        }
        other => other.to_string(),
    }
}

impl TerminalApp {
    #[must_use]
    pub fn new(service: QuizService, theme: Theme) -> Self {
        Self {
            service,
            theme,
            pending_reset: false,
        }
    }

    #[must_use]
    pub fn service(&self) -> &QuizService {
        &self.service
    }

    #[must_use]
    pub fn is_confirming_reset(&self) -> bool {
        self.pending_reset
    }

    #[must_use]
    pub fn screen(&self) -> String {
        render_screen(&self.service, &self.theme)
    }

    /// Handle one line of input.
    pub async fn dispatch(&mut self, line: &str) -> Reply {
        if self.pending_reset {
            self.pending_reset = false;
            return if line.trim().eq_ignore_ascii_case("oui") {
                self.service.reset_all().await;
                Reply::Redraw
            } else {
                Reply::Message("Réinitialisation annulée.".to_owned())
            };
        }

        let intent = match Intent::parse(line) {
            Ok(intent) => intent,
            Err(err) => return Reply::Message(err.to_string()),
        };
        debug!(?intent, "dispatch");

        match intent {
            Intent::Start => {
                if self.service.start_session() == StartOutcome::Exhausted {
                    debug!("no question left; showing summary");
                }
                Reply::Redraw
            }
            Intent::Answer { position, value } => match self.service.answer(position, value) {
                Ok(()) => Reply::Redraw,
                Err(err) => Reply::Message(describe(&err)),
            },
            Intent::Submit => match self.service.submit().await {
                Ok(_) => Reply::Redraw,
                Err(err) => Reply::Message(describe(&err)),
            },
            Intent::ShowResults => match self.service.show_results() {
                Ok(()) => Reply::Redraw,
                Err(err) => Reply::Message(describe(&err)),
            },
            Intent::Reset => {
                self.pending_reset = true;
                Reply::Message(RESET_PROMPT.to_owned())
            }
            Intent::Help => Reply::Message(render_help()),
            Intent::Quit => Reply::Quit,
        }
    }

    /// Drive the app until `quitter` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading input or writing output fails.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        write!(output, "{}\n> ", self.screen())?;
        output.flush()?;

        while let Some(line) = lines.next_line().await? {
            match self.dispatch(&line).await {
                Reply::Quit => break,
                Reply::Redraw => write!(output, "\n{}", self.screen())?,
                Reply::Message(message) => writeln!(output, "{message}")?,
            }
            write!(output, "> ")?;
            output.flush()?;
        }
        writeln!(output)?;
        Ok(())
    }
}
