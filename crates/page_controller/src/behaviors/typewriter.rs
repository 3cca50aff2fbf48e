use std::time::Duration;

use crate::{
    dom::{Document, ElementId},
    settings::{ms, ControllerSettings},
};

use super::{TimerTask, Timers};

/// What the last tick did, which decides how long until the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    /// The whole word is shown; deletion starts after the hold.
    Completed,
    Deleting,
    /// The word is gone; the next tick starts the following word.
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub phase: TypingPhase,
}

/// Position in the endless type/delete cycle. Indices count characters.
#[derive(Debug, Clone)]
pub struct TypingState {
    words: Vec<String>,
    word_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingState {
    /// Empty words are skipped; `None` when nothing is left to type.
    pub fn new(words: Vec<String>) -> Option<Self> {
        let words: Vec<String> = words.into_iter().filter(|w| !w.is_empty()).collect();
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            word_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.word_index]
    }

    pub fn tick(&mut self) -> TypingFrame {
        let word = &self.words[self.word_index];
        let len = word.chars().count();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }
        let text: String = word.chars().take(self.char_index).collect();

        let phase = if !self.deleting && self.char_index == len {
            self.deleting = true;
            TypingPhase::Completed
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.word_index = (self.word_index + 1) % self.words.len();
            TypingPhase::Cleared
        } else if self.deleting {
            TypingPhase::Deleting
        } else {
            TypingPhase::Typing
        };

        TypingFrame { text, phase }
    }
}

/// Drives `TypingState` on the `.typed` element with a blinking cursor.
#[derive(Debug, Clone)]
pub struct Typewriter {
    target: ElementId,
    state: TypingState,
    type_delay: Duration,
    delete_delay: Duration,
    hold: Duration,
    cursor_blink: Duration,
}

impl Typewriter {
    pub fn register(doc: &Document, settings: &ControllerSettings) -> Option<Self> {
        Some(Self {
            target: doc.query(".typed")?,
            state: TypingState::new(settings.typed_words.clone())?,
            type_delay: ms(settings.type_char_ms),
            delete_delay: ms(settings.delete_char_ms),
            hold: ms(settings.word_hold_ms),
            cursor_blink: ms(settings.cursor_blink_ms),
        })
    }

    pub fn start(&self, timers: &mut Timers, after: Duration) {
        timers.schedule(after, TimerTask::TypeTick);
    }

    pub fn state(&self) -> &TypingState {
        &self.state
    }

    pub fn tick(&mut self, doc: &mut Document, timers: &mut Timers) {
        let frame = self.state.tick();
        doc.set_text(self.target, &frame.text);
        doc.set_style(self.target, "border-right", "2px solid white");
        timers.schedule(self.cursor_blink, TimerTask::CursorOff);

        let next = match frame.phase {
            TypingPhase::Typing | TypingPhase::Cleared => self.type_delay,
            TypingPhase::Completed => self.hold,
            TypingPhase::Deleting => self.delete_delay,
        };
        timers.schedule(next, TimerTask::TypeTick);
    }

    pub fn cursor_off(&self, doc: &mut Document) {
        doc.set_style(self.target, "border-right", "2px solid transparent");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(words: &[&str]) -> TypingState {
        TypingState::new(words.iter().map(|w| w.to_string()).collect()).expect("words")
    }

    #[test]
    fn types_holds_deletes_and_advances() {
        let mut typing = state(&["ab", "c"]);
        let frames: Vec<(String, TypingPhase)> = (0..7)
            .map(|_| {
                let f = typing.tick();
                (f.text, f.phase)
            })
            .collect();
        assert_eq!(
            frames,
            vec![
                ("a".into(), TypingPhase::Typing),
                ("ab".into(), TypingPhase::Completed),
                ("a".into(), TypingPhase::Deleting),
                ("".into(), TypingPhase::Cleared),
                ("c".into(), TypingPhase::Completed),
                ("".into(), TypingPhase::Cleared),
                ("a".into(), TypingPhase::Typing),
            ]
        );
    }

    #[test]
    fn never_leaves_word_bounds_and_cycles_in_order() {
        let mut typing = state(&["Étudiante", "Développeuse", "Artisane du code"]);
        let mut finished = Vec::new();
        for _ in 0..500 {
            let word = typing.current_word().to_string();
            let frame = typing.tick();
            assert!(frame.text.chars().count() <= word.chars().count());
            assert!(word.starts_with(&frame.text));
            if frame.phase == TypingPhase::Cleared {
                assert_eq!(typing.char_index(), 0);
                finished.push(word);
            }
        }
        assert!(finished.len() >= 4);
        for (i, word) in finished.iter().enumerate() {
            assert_eq!(word, ["Étudiante", "Développeuse", "Artisane du code"][i % 3]);
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut typing = state(&["Éé"]);
        assert_eq!(typing.tick().text, "É");
        let full = typing.tick();
        assert_eq!(full.text, "Éé");
        assert_eq!(full.phase, TypingPhase::Completed);
        assert!(typing.is_deleting());
    }

    #[test]
    fn rejects_empty_word_list() {
        assert!(TypingState::new(vec![String::new()]).is_none());
        assert!(TypingState::new(Vec::new()).is_none());
    }
}
