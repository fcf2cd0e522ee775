//! Ordered block rules.
//!
//! Registration order is load-bearing: the playground rule runs before
//! the generic fence rule so `$$` lines are claimed first, and the flow
//! rule is the unconditional fallback.

pub mod fence;
pub mod flow;
pub mod playground;

pub use fence::{FenceKind, FencedCode};
pub use flow::MarkdownFlow;
pub use playground::PlaygroundFence;

use super::ParseState;
use super::tokens::Token;

/// What a rule did with the candidate line.
#[derive(Debug)]
pub enum RuleOutcome {
    /// Line not recognized; the host falls through to the next rule.
    /// Never an error.
    NoMatch,
    /// The rule consumed `[state.line, next_line)` and produced a token.
    Consumed { token: Token, next_line: usize },
}

/// A block-level parse rule, tried at each candidate line.
pub trait BlockRule {
    fn name(&self) -> &'static str;

    /// Inspects the context at `state.line` and either claims a run of
    /// lines or declines. Must not look behind `state.line` or beyond
    /// `state.end_line`.
    fn apply(&self, state: &ParseState<'_>) -> RuleOutcome;
}

/// The shipped rule chain, in registration order.
#[must_use]
pub fn rule_chain() -> Vec<Box<dyn BlockRule>> {
    vec![
        Box::new(PlaygroundFence),
        Box::new(FencedCode),
        Box::new(MarkdownFlow),
    ]
}
