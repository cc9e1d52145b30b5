//! Builder for constructing lexer models.

use crate::builder::error::{ModelError, StateBound};
use crate::core::{parse_actions, LexerModel, StateId, Transition};
use crate::syntax::{check_condition, parse_condition, ConditionSyntax};
use log::debug;

/// Action list for transitions that only move between states.
pub const NO_ACTIONS: [&str; 0] = [];

/// Append-only builder for a [`LexerModel`].
///
/// The number of states is fixed up front. Each `add_transition` call is
/// atomic: it either appends one transition after all earlier ones filed
/// under the same state, or fails and changes nothing. `build` freezes the
/// table into an immutable model.
///
/// # Example
///
/// ```rust
/// use lexspec::builder::{LexerModelBuilder, NO_ACTIONS};
///
/// let mut builder = LexerModelBuilder::new(2);
/// builder
///     .add_transition(0, 0, [" ", "\t"], NO_ACTIONS)?
///     .add_transition(0, 0, "+", ["B", "A", "E:PLUS"])?
///     .add_transition(0, 1, "0-9", ["B", "A"])?
///     .add_transition(1, 1, "0-9", ["A"])?
///     .add_transition(1, 0, "else", ["E:NUM", "F"])?;
///
/// let model = builder.build()?;
/// assert_eq!(model.transition_count(), 5);
/// # Ok::<(), lexspec::builder::ModelError>(())
/// ```
#[derive(Clone, Debug)]
pub struct LexerModelBuilder {
    num_states: usize,
    transitions: Vec<Vec<Transition>>,
}

impl LexerModelBuilder {
    /// Create a builder with `num_states` empty transition lists.
    pub fn new(num_states: usize) -> Self {
        Self {
            num_states,
            transitions: vec![Vec::new(); num_states],
        }
    }

    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Transitions declared so far for `state`.
    pub fn transitions(&self, state: StateId) -> Option<&[Transition]> {
        self.transitions.get(state).map(Vec::as_slice)
    }

    /// Declare a transition from `from` to `to`, firing on `condition` and
    /// running `actions` in order.
    ///
    /// Validation runs in this order, before anything is stored: state
    /// bounds, action tokens, condition notation.
    pub fn add_transition<C, I, T>(
        &mut self,
        from: StateId,
        to: StateId,
        condition: C,
        actions: I,
    ) -> Result<&mut Self, ModelError>
    where
        C: Into<ConditionSyntax>,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let transition = self
            .check_states(from, to)
            .and_then(|()| {
                let actions = parse_actions(actions)?;
                let condition = parse_condition(condition)?;
                Ok(Transition {
                    condition,
                    actions,
                    to,
                })
            })
            .inspect_err(|err| debug!("Rejected transition {from} -> {to}: {err}"))?;

        Ok(self.commit(from, transition))
    }

    /// Append an already-built transition under `from`.
    ///
    /// The condition must have a shape [`parse_condition`] could produce.
    pub fn push(&mut self, from: StateId, transition: Transition) -> Result<&mut Self, ModelError> {
        self.check_states(from, transition.to)
            .and_then(|()| check_condition(&transition.condition).map_err(ModelError::from))
            .inspect_err(|err| debug!("Rejected transition {from} -> {}: {err}", transition.to))?;
        Ok(self.commit(from, transition))
    }

    /// Freeze the declared table.
    pub fn build(self) -> Result<LexerModel, ModelError> {
        if self.num_states == 0 {
            return Err(ModelError::NoStates);
        }
        let model = LexerModel::from_parts(self.num_states, self.transitions);
        debug!(
            "Built lexer model with {} states and {} transitions",
            model.num_states(),
            model.transition_count()
        );
        Ok(model)
    }

    fn check_states(&self, from: StateId, to: StateId) -> Result<(), ModelError> {
        if from >= self.num_states {
            return Err(ModelError::InvalidState {
                bound: StateBound::From,
                state: from,
                num_states: self.num_states,
            });
        }
        if to >= self.num_states {
            return Err(ModelError::InvalidState {
                bound: StateBound::To,
                state: to,
                num_states: self.num_states,
            });
        }
        Ok(())
    }

    fn commit(&mut self, from: StateId, transition: Transition) -> &mut Self {
        debug!("State {from}: {transition}");
        self.transitions[from].push(transition);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Condition};
    use test_log::test;

    #[test]
    fn new_builder_has_empty_lists() {
        let builder = LexerModelBuilder::new(3);
        let model = builder.build().unwrap();

        assert_eq!(model.num_states(), 3);
        for (_, transitions) in model.states() {
            assert!(transitions.is_empty());
        }
    }

    #[test]
    fn build_requires_states() {
        let result = LexerModelBuilder::new(0).build();
        assert!(matches!(result, Err(ModelError::NoStates)));
    }

    #[test]
    fn from_state_out_of_range_is_rejected() {
        let mut builder = LexerModelBuilder::new(2);
        let err = builder.add_transition(2, 0, "a", NO_ACTIONS).unwrap_err();

        assert_eq!(
            err,
            ModelError::InvalidState {
                bound: StateBound::From,
                state: 2,
                num_states: 2,
            }
        );
    }

    #[test]
    fn to_state_out_of_range_is_rejected() {
        let mut builder = LexerModelBuilder::new(2);
        let err = builder.add_transition(0, 7, "a", NO_ACTIONS).unwrap_err();

        assert!(matches!(
            err,
            ModelError::InvalidState {
                bound: StateBound::To,
                state: 7,
                ..
            }
        ));
    }

    #[test]
    fn state_errors_take_precedence() {
        let mut builder = LexerModelBuilder::new(1);
        let err = builder.add_transition(0, 3, "bad", ["?"]).unwrap_err();
        assert!(matches!(err, ModelError::InvalidState { .. }));
    }

    #[test]
    fn action_errors_precede_condition_errors() {
        let mut builder = LexerModelBuilder::new(1);
        let err = builder.add_transition(0, 0, "bad", ["?"]).unwrap_err();
        assert!(matches!(err, ModelError::InvalidAction(ref e) if e.token == "?"));
    }

    #[test]
    fn invalid_condition_is_reported() {
        let mut builder = LexerModelBuilder::new(1);
        let err = builder.add_transition(0, 0, "abc", ["B"]).unwrap_err();
        assert!(matches!(err, ModelError::InvalidCondition(_)));
    }

    #[test]
    fn failed_call_leaves_builder_unchanged() {
        let mut builder = LexerModelBuilder::new(2);
        builder.add_transition(0, 1, "a", ["B", "A"]).unwrap();
        let before = builder.transitions(0).unwrap().to_vec();

        assert!(builder.add_transition(0, 1, "b", ["B", "nope"]).is_err());
        assert!(builder.add_transition(0, 5, "b", ["B"]).is_err());
        assert!(builder.add_transition(0, 1, "xyz", ["B"]).is_err());

        assert_eq!(builder.transitions(0).unwrap(), before.as_slice());
        assert!(builder.transitions(1).unwrap().is_empty());
    }

    #[test]
    fn transitions_append_in_declaration_order() {
        let mut builder = LexerModelBuilder::new(1);
        builder
            .add_transition(0, 0, "a", ["B"])
            .unwrap()
            .add_transition(0, 0, "b", ["A"])
            .unwrap();

        let model = builder.build().unwrap();
        let list = model.transitions(0).unwrap();
        assert_eq!(list[0].condition, Condition::Char('a'));
        assert_eq!(list[0].actions, vec![Action::Begin]);
        assert_eq!(list[1].condition, Condition::Char('b'));
        assert_eq!(list[1].actions, vec![Action::Append]);
    }

    #[test]
    fn push_validates_destination() {
        let mut builder = LexerModelBuilder::new(1);
        let transition = Transition {
            condition: Condition::Else,
            actions: vec![],
            to: 1,
        };
        assert!(builder.push(0, transition).is_err());
        assert!(builder.transitions(0).unwrap().is_empty());
    }

    #[test]
    fn push_rejects_malformed_condition() {
        let mut builder = LexerModelBuilder::new(1);
        let transition = Transition {
            condition: Condition::Or(vec![]),
            actions: vec![],
            to: 0,
        };

        let result = builder.push(0, transition);

        assert!(matches!(result, Err(ModelError::InvalidCondition(_))));
        assert!(builder.transitions(0).unwrap().is_empty());
    }

    #[test]
    fn push_accepts_parsed_condition() {
        let mut builder = LexerModelBuilder::new(1);
        let transition = Transition {
            condition: parse_condition(("a", "0-9")).unwrap(),
            actions: vec![Action::Begin],
            to: 0,
        };

        builder.push(0, transition).unwrap();
        assert_eq!(builder.transitions(0).unwrap().len(), 1);
    }
}
