use owo_colors::OwoColorize;

/// Terminal styling. `Theme::plain()` renders without escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    colored: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}

impl Theme {
    #[must_use]
    pub fn colored() -> Self {
        Self { colored: true }
    }

    #[must_use]
    pub fn plain() -> Self {
        Self { colored: false }
    }

    pub fn title(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_owned()
        }
    }

    pub fn success(&self, text: &str) -> String {
        if self.colored {
            text.bright_green().to_string()
        } else {
            text.to_owned()
        }
    }

    pub fn danger(&self, text: &str) -> String {
        if self.colored {
            text.bright_red().to_string()
        } else {
            text.to_owned()
        }
    }

    pub fn accent(&self, text: &str) -> String {
        if self.colored {
            text.cyan().to_string()
        } else {
            text.to_owned()
        }
    }

    pub fn muted(&self, text: &str) -> String {
        if self.colored {
            text.dimmed().to_string()
        } else {
            text.to_owned()
        }
    }

    /// Green at or above the passing mark, red below.
    pub fn verdict(&self, text: &str, passing: bool) -> String {
        if passing {
            self.success(text)
        } else {
            self.danger(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_alone() {
        let theme = Theme::plain();
        assert_eq!(theme.verdict("80%", true), "80%");
        assert_eq!(theme.title("Quiz"), "Quiz");
    }

    #[test]
    fn colored_theme_wraps_in_escape_codes() {
        let theme = Theme::colored();
        let out = theme.danger("40%");
        assert!(out.contains("40%"));
        assert!(out.starts_with('\u{1b}'));
    }
}
