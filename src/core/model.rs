//! The frozen lexer model.
//!
//! A [`LexerModel`] only comes out of [`crate::builder::LexerModelBuilder::build`]
//! or out of deserialization, both of which validate state bounds and
//! condition shapes. It has no mutation path, so it can be shared across
//! threads as-is.

use super::condition::Symbol;
use super::transition::{StateId, Transition};
use crate::builder::{ModelError, StateBound};
use crate::syntax::check_condition;
use serde::{Deserialize, Serialize};

/// Immutable, validated table of per-state ordered transitions.
///
/// # Example
///
/// ```rust
/// use lexspec::builder::LexerModelBuilder;
///
/// let mut builder = LexerModelBuilder::new(2);
/// builder.add_transition(0, 1, "0-9", ["B", "A"]).unwrap();
/// let model = builder.build().unwrap();
///
/// assert_eq!(model.num_states(), 2);
/// assert_eq!(model.transitions(0).unwrap().len(), 1);
/// assert!(model.transitions(1).unwrap().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawModel")]
pub struct LexerModel {
    num_states: usize,
    transitions: Vec<Vec<Transition>>,
}

/// Unchecked wire shape of a model, validated on the way in.
#[derive(Deserialize)]
struct RawModel {
    num_states: usize,
    transitions: Vec<Vec<Transition>>,
}

impl TryFrom<RawModel> for LexerModel {
    type Error = ModelError;

    fn try_from(raw: RawModel) -> Result<Self, Self::Error> {
        if raw.num_states == 0 {
            return Err(ModelError::NoStates);
        }
        if raw.transitions.len() != raw.num_states {
            return Err(ModelError::StateCountMismatch {
                num_states: raw.num_states,
                lists: raw.transitions.len(),
            });
        }
        for transition in raw.transitions.iter().flatten() {
            if transition.to >= raw.num_states {
                return Err(ModelError::InvalidState {
                    bound: StateBound::To,
                    state: transition.to,
                    num_states: raw.num_states,
                });
            }
            check_condition(&transition.condition)?;
        }
        Ok(Self::from_parts(raw.num_states, raw.transitions))
    }
}

impl LexerModel {
    /// Callers guarantee the state bounds have been checked.
    pub(crate) fn from_parts(num_states: usize, transitions: Vec<Vec<Transition>>) -> Self {
        Self {
            num_states,
            transitions,
        }
    }

    /// Number of states; valid ids are `0..num_states`.
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Ordered transitions filed under `state`, or `None` if out of range.
    pub fn transitions(&self, state: StateId) -> Option<&[Transition]> {
        self.transitions.get(state).map(Vec::as_slice)
    }

    /// Every state with its ordered transitions, in state order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &[Transition])> + '_ {
        self.transitions
            .iter()
            .enumerate()
            .map(|(state, list)| (state, list.as_slice()))
    }

    /// Total number of transitions across all states.
    pub fn transition_count(&self) -> usize {
        self.transitions.iter().map(Vec::len).sum()
    }

    /// First transition of `state` whose condition matches `symbol`,
    /// with its position in the state's list.
    ///
    /// This is the whole precedence rule: declaration order, first match wins.
    pub fn select(&self, state: StateId, symbol: Symbol) -> Option<(usize, &Transition)> {
        self.transitions(state)?
            .iter()
            .enumerate()
            .find(|(_, t)| t.accepts(symbol))
    }
}
