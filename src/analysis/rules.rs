//! Analysis rules for lexer models using Validation.

use crate::analysis::diagnostics::Diagnostic;
use crate::analysis::symbols::DispatchTable;
use crate::core::{Condition, LexerModel, StateId};
use std::collections::{BTreeSet, VecDeque};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for custom model checks
pub type ModelCheck =
    Box<dyn Fn(&LexerModel) -> Validation<(), NonEmptyVec<Diagnostic>> + Send + Sync>;

/// Which analyses to run over a model.
/// Uses Validation to accumulate ALL findings.
pub struct AnalysisRules {
    pub(crate) empty_ranges: bool,
    pub(crate) shadowed_transitions: bool,
    pub(crate) unreachable_states: bool,
    pub(crate) dead_end_states: bool,
    pub(crate) feed_cycles: bool,
    pub(crate) custom_checks: Vec<ModelCheck>,
}

impl Default for AnalysisRules {
    fn default() -> Self {
        Self {
            empty_ranges: true,
            shadowed_transitions: true,
            unreachable_states: true,
            dead_end_states: true,
            feed_cycles: true,
            custom_checks: Vec::new(),
        }
    }
}

impl AnalysisRules {
    /// Run every enabled analysis, accumulating ALL findings.
    /// Returns Validation::Success(()) if nothing was found.
    pub fn check(&self, model: &LexerModel) -> Validation<(), NonEmptyVec<Diagnostic>> {
        let table = DispatchTable::new(model);
        let reachable = reachable_states(model, &table);
        let mut findings = Vec::new();

        if self.empty_ranges {
            findings.extend(empty_ranges(model));
        }
        if self.shadowed_transitions {
            findings.extend(shadowed_transitions(model, &table));
        }
        if self.unreachable_states {
            findings.extend(
                (0..model.num_states())
                    .filter(|state| !reachable.contains(state))
                    .map(|state| Diagnostic::UnreachableState { state }),
            );
        }
        if self.dead_end_states {
            findings.extend(reachable.iter().copied().filter_map(|state| {
                model
                    .transitions(state)
                    .is_some_and(<[_]>::is_empty)
                    .then_some(Diagnostic::DeadEndState { state })
            }));
        }
        if self.feed_cycles {
            findings.extend(feed_cycles(model, &table, &reachable));
        }

        let mut checks: Vec<Validation<(), NonEmptyVec<Diagnostic>>> =
            findings.into_iter().map(|finding| Validation::fail(finding)).collect();
        for check_fn in &self.custom_checks {
            checks.push(check_fn(model));
        }
        if checks.is_empty() {
            return Validation::success(());
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Run the analyses and flatten the findings into a list.
    pub fn diagnostics(&self, model: &LexerModel) -> Vec<Diagnostic> {
        match self.check(model) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }
}

fn empty_ranges(model: &LexerModel) -> Vec<Diagnostic> {
    fn collect(condition: &Condition, out: &mut Vec<(char, char)>) {
        match condition {
            Condition::Range(lo, hi) if lo > hi => out.push((*lo, *hi)),
            Condition::Not(inner) => collect(inner, out),
            Condition::Or(subs) | Condition::Neither(subs) => {
                subs.iter().for_each(|sub| collect(sub, out))
            }
            _ => {}
        }
    }

    let mut findings = Vec::new();
    for (state, transitions) in model.states() {
        for (index, transition) in transitions.iter().enumerate() {
            let mut ranges = Vec::new();
            collect(&transition.condition, &mut ranges);
            findings.extend(ranges.into_iter().map(|(lo, hi)| Diagnostic::EmptyRange {
                state,
                index,
                lo,
                hi,
            }));
        }
    }
    findings
}

fn shadowed_transitions(model: &LexerModel, table: &DispatchTable) -> Vec<Diagnostic> {
    let mut findings = Vec::new();
    for (state, transitions) in model.states() {
        for (index, transition) in transitions.iter().enumerate() {
            let mut first_winner = None;
            let mut fires = false;
            for (i, symbol) in table.symbols.iter().enumerate() {
                if !transition.accepts(*symbol) {
                    continue;
                }
                match table.fires(state, i) {
                    Some(winner) if winner == index => {
                        fires = true;
                        break;
                    }
                    Some(winner) => {
                        first_winner.get_or_insert(winner);
                    }
                    None => {}
                }
            }
            if let (false, Some(by)) = (fires, first_winner) {
                findings.push(Diagnostic::ShadowedTransition { state, index, by });
            }
        }
    }
    findings
}

/// States reachable from 0 through transitions that can actually fire.
fn reachable_states(model: &LexerModel, table: &DispatchTable) -> BTreeSet<StateId> {
    let mut reachable = BTreeSet::from([0]);
    let mut queue = VecDeque::from([0]);
    while let Some(state) = queue.pop_front() {
        let Some(transitions) = model.transitions(state) else {
            continue;
        };
        let fired: BTreeSet<usize> = (0..table.symbols.len())
            .filter_map(|i| table.fires(state, i))
            .collect();
        for index in fired {
            let transition = &transitions[index];
            if !transition.raises() && reachable.insert(transition.to) {
                queue.push_back(transition.to);
            }
        }
    }
    reachable
}

/// Feed chains that revisit a `(state, buffer open)` pair at one position.
///
/// The buffer status at the start of a chain is not tracked, so both are
/// tried. A cycle may therefore be reported for a status the scan never
/// actually brings to that state.
fn feed_cycles(
    model: &LexerModel,
    table: &DispatchTable,
    reachable: &BTreeSet<StateId>,
) -> Vec<Diagnostic> {
    let mut reported = BTreeSet::new();
    let mut findings = Vec::new();
    for &start in reachable {
        for (i, &symbol) in table.symbols.iter().enumerate() {
            for open in [false, true] {
                let mut visited = vec![(start, open)];
                let (mut current, mut open) = (start, open);
                while let Some(index) = table.fires(current, i) {
                    let transition = &model.transitions(current).unwrap_or_default()[index];
                    if !transition.feeds() {
                        break;
                    }
                    let Some(after) = transition.buffer_after(open, symbol) else {
                        break;
                    };
                    let next = (transition.to, after);
                    if visited.contains(&next) {
                        if reported.insert(transition.to) {
                            findings.push(Diagnostic::FeedCycle {
                                state: transition.to,
                                symbol,
                            });
                        }
                        break;
                    }
                    visited.push(next);
                    (current, open) = next;
                }
            }
        }
    }
    findings
}
