use std::str::{FromStr, SplitWhitespace};

use folio_core::input::{PointerEvent, PointerKind, PointerTarget, UiCommand};
use thiserror::Error;

use super::pages;

/// Session replayed when no script file is given.
pub(super) const DEMO_SCRIPT: &str = "\
# tab to about, then swipe forward to experience
tab about 2600
down 300 500 3600
move 290 501 3660
move 250 503 3740
up 210 503 3820
# dropped: the swipe is still exiting
tab home 3900
# 35 px drag: snaps back
down 300 500 5000
move 285 500 5050
move 270 501 5100
up 265 501 5160
# vertical scroll, never a swipe
down 300 500 5600
move 290 440 5640
move 200 380 5700
up 180 380 5760
menu contact 6200
# last page: nothing further
down 300 500 7400
move 280 500 7450
up 200 500 7580
# starts on the tab bar: ignored
down 100 900 8000 tabbar
up 300 900 8200
link projects 8600
";

#[derive(Debug)]
pub(super) struct Script {
    pub(super) pointer: Vec<PointerEvent>,
    pub(super) clicks: Vec<(u64, UiCommand)>,
}

impl Script {
    pub(super) fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut pointer = Vec::new();
        let mut clicks = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let content = raw.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }

            let mut words = content.split_whitespace();
            let Some(verb) = words.next() else {
                continue;
            };

            match verb {
                "down" | "move" | "up" | "cancel" => {
                    let kind = match verb {
                        "down" => PointerKind::Down,
                        "move" => PointerKind::Move,
                        "up" => PointerKind::Up,
                        _ => PointerKind::Cancel,
                    };
                    let x = number(&mut words, line)?;
                    let y = number(&mut words, line)?;
                    let time_ms = number(&mut words, line)?;
                    let target = match words.next() {
                        None | Some("content") => PointerTarget::Content,
                        Some("input") => PointerTarget::TextInput,
                        Some("button") => PointerTarget::Button,
                        Some("tabbar") => PointerTarget::TabBar,
                        Some(other) => {
                            return Err(ScriptError::new(
                                line,
                                ScriptErrorKind::UnknownTarget(other.to_owned()),
                            ));
                        }
                    };
                    pointer.push(PointerEvent::new(kind, x, y, time_ms).on(target));
                }
                "tab" | "menu" | "link" => {
                    let name = words
                        .next()
                        .ok_or(ScriptError::new(line, ScriptErrorKind::MissingField))?;
                    let page = pages::page_by_name(name).ok_or_else(|| {
                        ScriptError::new(line, ScriptErrorKind::UnknownPage(name.to_owned()))
                    })?;
                    let time_ms = number(&mut words, line)?;
                    let command = match verb {
                        "tab" => UiCommand::Tab(page),
                        "menu" => UiCommand::Menu(page),
                        _ => UiCommand::Link(page),
                    };
                    clicks.push((time_ms, command));
                }
                other => {
                    return Err(ScriptError::new(
                        line,
                        ScriptErrorKind::UnknownVerb(other.to_owned()),
                    ));
                }
            }
        }

        pointer.sort_by_key(|event| event.time_ms);
        clicks.sort_by_key(|(time_ms, _)| *time_ms);
        Ok(Self { pointer, clicks })
    }

    /// Timestamp of the last scripted input.
    pub(super) fn end_ms(&self) -> u64 {
        let pointer_end = self.pointer.last().map_or(0, |event| event.time_ms);
        let click_end = self.clicks.last().map_or(0, |(time_ms, _)| *time_ms);
        pointer_end.max(click_end)
    }
}

fn number<T: FromStr>(
    words: &mut SplitWhitespace<'_>,
    line: usize,
) -> Result<T, ScriptError> {
    let word = words
        .next()
        .ok_or(ScriptError::new(line, ScriptErrorKind::MissingField))?;
    word.parse()
        .map_err(|_| ScriptError::new(line, ScriptErrorKind::BadNumber(word.to_owned())))
}

#[derive(Debug, Error)]
#[error("script line {line}: {kind}")]
pub(super) struct ScriptError {
    line: usize,
    kind: ScriptErrorKind,
}

#[derive(Debug, Error)]
enum ScriptErrorKind {
    #[error("unknown command `{0}`")]
    UnknownVerb(String),
    #[error("unknown page `{0}`")]
    UnknownPage(String),
    #[error("unknown pointer target `{0}`")]
    UnknownTarget(String),
    #[error("`{0}` is not a number")]
    BadNumber(String),
    #[error("missing field")]
    MissingField,
}

impl ScriptError {
    fn new(line: usize, kind: ScriptErrorKind) -> Self {
        Self { line, kind }
    }
}
