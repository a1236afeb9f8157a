#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// The "someone is typing" banner.
///
/// Only the most recent remote typer is shown; a newer notification simply
/// overwrites the text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypingIndicator {
    pub text: String,
    pub visible: bool,
}

impl TypingIndicator {
    pub fn show(&mut self, user: &str) {
        self.text = format!("{user} is typing...");
        self.visible = true;
    }

    /// Hide the banner; the last text is kept so a fade-out has content.
    pub fn hide(&mut self) {
        self.visible = false;
    }
}
