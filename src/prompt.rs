//! Text prompts used by the new/save/load commands.
//!
//! [`PromptService`] is the blocking question/answer contract the editor
//! commands are written against. [`PromptSequence`] is the same contract
//! driven one frame at a time, for front-ends that cannot block their loop.

/// Something that can ask the user for one line of text.
pub trait PromptService {
    /// Returns the committed line, or `None` if the user cancelled.
    fn prompt_line(&mut self, question: &str) -> Option<String>;
}

/// A key relevant to line editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKey {
    /// Typed character
    Char(char),
    /// Delete the last character
    Backspace,
    /// Commit the line
    Enter,
    /// Cancel the prompt
    Escape,
}

/// Result of feeding a key to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent<T> {
    /// Still collecting input
    Pending,
    /// Input finished
    Committed(T),
    /// Escape was pressed; the input is discarded
    Cancelled,
}

/// Single-line editor. Accepts ASCII letters and digits, stored upper-case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput {
    buffer: String,
}

impl LineInput {
    /// Empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text typed so far.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Applies one key. Enter hands back the line and clears the buffer.
    pub fn feed(&mut self, key: PromptKey) -> PromptEvent<String> {
        match key {
            PromptKey::Char(c) if c.is_ascii_alphanumeric() => {
                self.buffer.push(c.to_ascii_uppercase());
                PromptEvent::Pending
            }
            PromptKey::Char(_) => PromptEvent::Pending,
            PromptKey::Backspace => {
                self.buffer.pop();
                PromptEvent::Pending
            }
            PromptKey::Enter => PromptEvent::Committed(std::mem::take(&mut self.buffer)),
            PromptKey::Escape => {
                self.buffer.clear();
                PromptEvent::Cancelled
            }
        }
    }
}

/// Asks a fixed list of questions in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSequence {
    questions: Vec<&'static str>,
    answers: Vec<String>,
    input: LineInput,
}

impl PromptSequence {
    /// Starts at the first of `questions`.
    pub fn new(questions: &[&'static str]) -> Self {
        PromptSequence {
            questions: questions.to_vec(),
            answers: Vec::with_capacity(questions.len()),
            input: LineInput::new(),
        }
    }

    /// Question currently being answered.
    pub fn question(&self) -> &'static str {
        self.questions
            .get(self.answers.len())
            .copied()
            .unwrap_or_default()
    }

    /// Text typed so far for the current question.
    pub fn input(&self) -> &str {
        self.input.text()
    }

    /// Feeds one key; yields all answers once the last question is committed.
    pub fn feed(&mut self, key: PromptKey) -> PromptEvent<Vec<String>> {
        match self.input.feed(key) {
            PromptEvent::Pending => PromptEvent::Pending,
            PromptEvent::Cancelled => PromptEvent::Cancelled,
            PromptEvent::Committed(line) => {
                self.answers.push(line);
                if self.answers.len() == self.questions.len() {
                    PromptEvent::Committed(std::mem::take(&mut self.answers))
                } else {
                    PromptEvent::Pending
                }
            }
        }
    }
}

/// Replays answers collected elsewhere through the [`PromptService`] contract.
/// Once the answers run out every further question is cancelled.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
}

impl ScriptedPrompt {
    /// Answers handed out in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompt {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

impl PromptService for ScriptedPrompt {
    fn prompt_line(&mut self, _question: &str) -> Option<String> {
        self.answers.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut LineInput, s: &str) {
        for c in s.chars() {
            input.feed(PromptKey::Char(c));
        }
    }

    #[test]
    fn line_input_uppercases_and_filters() {
        let mut input = LineInput::new();
        type_str(&mut input, "town-1 x");
        assert_eq!(input.text(), "TOWN1X");
        input.feed(PromptKey::Backspace);
        assert_eq!(input.feed(PromptKey::Enter), PromptEvent::Committed("TOWN1".into()));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn backspace_on_empty_is_harmless() {
        let mut input = LineInput::new();
        assert_eq!(input.feed(PromptKey::Backspace), PromptEvent::Pending);
        assert_eq!(input.feed(PromptKey::Enter), PromptEvent::Committed(String::new()));
    }

    #[test]
    fn sequence_collects_all_answers() {
        let mut seq = PromptSequence::new(&["NAME?", "ROW?"]);
        assert_eq!(seq.question(), "NAME?");
        for c in "abc".chars() {
            seq.feed(PromptKey::Char(c));
        }
        assert_eq!(seq.feed(PromptKey::Enter), PromptEvent::Pending);
        assert_eq!(seq.question(), "ROW?");
        seq.feed(PromptKey::Char('3'));
        assert_eq!(
            seq.feed(PromptKey::Enter),
            PromptEvent::Committed(vec!["ABC".into(), "3".into()])
        );
    }

    #[test]
    fn escape_cancels_sequence() {
        let mut seq = PromptSequence::new(&["NAME?", "ROW?"]);
        seq.feed(PromptKey::Char('a'));
        seq.feed(PromptKey::Enter);
        assert_eq!(seq.feed(PromptKey::Escape), PromptEvent::Cancelled);
    }

    #[test]
    fn scripted_prompt_cancels_when_exhausted() {
        let mut prompt = ScriptedPrompt::new(["ONE"]);
        assert_eq!(prompt.prompt_line("A?"), Some("ONE".into()));
        assert_eq!(prompt.prompt_line("B?"), None);
    }
}
