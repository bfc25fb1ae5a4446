//! Scripted replay: drive a [`HistoryStore`] from a list of text tokens.
//!
//! Each token maps to one UI event. Rejected moves and jumps are recorded
//! and skipped, the same way the interactive UI ignores them.

use rewind_core::{GameView, HistoryStore, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One scripted interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Step {
    /// Play a cell (0-8).
    #[display("p{}", _0)]
    Play(usize),
    /// Jump to a history index.
    #[display("j{}", _0)]
    Jump(usize),
    /// Toggle the move list order.
    #[display("s")]
    ToggleSort,
    /// Start over.
    #[display("r")]
    Reset,
}

/// A token that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ScriptError {
    /// Token is not one of the known forms.
    #[display("Unrecognized token '{}' at position {}", token, index)]
    UnknownToken {
        /// Offending token.
        token: String,
        /// Zero-based token position.
        index: usize,
    },
    /// Token has the right prefix but no valid number.
    #[display("Token '{}' at position {} needs a number", token, index)]
    BadNumber {
        /// Offending token.
        token: String,
        /// Zero-based token position.
        index: usize,
    },
}

impl std::error::Error for ScriptError {}

/// A step that the store refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// The refused step.
    pub step: Step,
    /// Why it was refused.
    pub reason: String,
}

/// Final state after a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// View of the store after the last step.
    pub view: GameView,
    /// Steps that were skipped.
    pub rejected: Vec<Rejection>,
}

/// Parses whitespace-separated tokens into steps.
///
/// Accepted forms: `4`, `p4`, a cell label such as `center` or `top-left`,
/// `j2`, `s`, `r` (case-insensitive).
#[instrument(skip(tokens))]
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Step>, ScriptError> {
    tokens
        .iter()
        .flat_map(|t| t.as_ref().split_whitespace())
        .enumerate()
        .map(|(index, token)| parse_token(token, index))
        .collect()
}

fn parse_token(token: &str, index: usize) -> Result<Step, ScriptError> {
    let lower = token.to_ascii_lowercase();
    let number = |digits: &str| {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ScriptError::BadNumber {
                token: token.to_string(),
                index,
            });
        }
        digits.parse::<usize>().map_err(|_| ScriptError::BadNumber {
            token: token.to_string(),
            index,
        })
    };

    match lower.as_str() {
        "s" => Ok(Step::ToggleSort),
        "r" => Ok(Step::Reset),
        t if t.starts_with('p') => number(&t[1..]).map(Step::Play),
        t if t.starts_with('j') => number(&t[1..]).map(Step::Jump),
        // Out-of-range cells still parse so the store can reject them.
        t if t.bytes().all(|b| b.is_ascii_digit()) => number(t).map(Step::Play),
        t => Position::from_label_or_number(t)
            .map(|pos| Step::Play(pos.to_index()))
            .ok_or_else(|| ScriptError::UnknownToken {
                token: token.to_string(),
                index,
            }),
    }
}

/// Applies `steps` to `store` in order.
///
/// Returns the steps the store rejected; accepted steps leave no record
/// beyond the store's own state.
#[instrument(skip(store, steps), fields(steps = steps.len()))]
pub fn apply(store: &mut HistoryStore, steps: &[Step]) -> Vec<Rejection> {
    let mut rejected = Vec::new();
    for &step in steps {
        let result = match step {
            Step::Play(cell) => store.play(cell).map_err(|e| e.to_string()),
            Step::Jump(index) => store.jump_to(index).map_err(|e| e.to_string()),
            Step::ToggleSort => {
                store.toggle_sort();
                Ok(())
            }
            Step::Reset => {
                store.reset();
                Ok(())
            }
        };
        if let Err(reason) = result {
            debug!(%step, %reason, "Step rejected");
            rejected.push(Rejection { step, reason });
        }
    }
    rejected
}

/// Parses and applies a script to `store`, returning the final report.
#[instrument(skip(store, tokens))]
pub fn replay<S: AsRef<str>>(
    store: &mut HistoryStore,
    tokens: &[S],
) -> Result<ReplayReport, ScriptError> {
    let steps = parse(tokens)?;
    let rejected = apply(store, &steps);
    Ok(ReplayReport {
        view: store.view(),
        rejected,
    })
}

/// Plain-text rendering of a report.
pub fn format_report(report: &ReplayReport) -> String {
    let view = &report.view;
    let mut out = String::new();

    out.push_str(&view.board.display());
    out.push_str("\n\n");
    out.push_str(&view.status.to_string());
    out.push('\n');
    if let Some(line) = view.status.winning_line() {
        let cells: Vec<String> = line.indices().iter().map(|i| i.to_string()).collect();
        out.push_str(&format!("Winning line: {}\n", cells.join(", ")));
    }

    out.push_str(&format!("\nSort: {}\n", view.sort_order.label()));
    for entry in &view.moves {
        out.push_str(&format!("  {}\n", entry.description()));
    }

    if !report.rejected.is_empty() {
        out.push_str("\nSkipped:\n");
        for rejection in &report.rejected {
            out.push_str(&format!("  {}: {}\n", rejection.step, rejection.reason));
        }
    }
    out
}
