use crate::assignment::Assignment;
use crate::formula::{Formula, Variable};
use crate::SatResult;
use log::{debug, trace};

/// Where a partial assignment stands with respect to the whole formula.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Status {
    /// Every clause already has a true literal.
    Satisfied,
    /// Some clause has no true literal and no unassigned one left.
    Conflict,
    Undecided,
}

/// Which branches of a decision have been entered so far.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    TriedTrue,
    TriedFalse,
}

#[derive(Debug)]
struct Decision {
    variable: Variable,
    phase: Phase,
}

/// Depth-first search over partial assignments with chronological backtracking.
///
/// Decisions pick the lowest unassigned variable and try `true` before `false`. A branch is
/// abandoned as soon as some clause can no longer be satisfied. There is no propagation or
/// learning; the only pruning is that conflict check.
///
/// The search keeps its decisions on an explicit trail rather than the call stack, so depth is
/// bounded by the number of variables and not by stack size.
pub struct Solver<'a> {
    formula: &'a Formula,
    state: SolverState,
}

#[derive(Debug, Default)]
struct SolverState {
    assignment: Assignment,
    trail: Vec<Decision>,
}

impl SolverState {
    fn decide(&mut self, variable: Variable) {
        trace!("decide {} = true at depth {}", variable, self.trail.len() + 1);
        self.assignment.assign(variable, true);
        self.trail.push(Decision {
            variable,
            phase: Phase::TriedTrue,
        });
    }

    /// Moves to the next untried branch, undoing exhausted decisions in reverse order. Returns
    /// false when every branch has been tried.
    fn backtrack(&mut self) -> bool {
        while let Some(decision) = self.trail.last_mut() {
            match decision.phase {
                Phase::TriedTrue => {
                    decision.phase = Phase::TriedFalse;
                    let variable = decision.variable;
                    self.assignment.assign(variable, false);
                    debug!("backtrack: flip {} to false at depth {}", variable, self.trail.len());
                    return true;
                }
                Phase::TriedFalse => {
                    let variable = decision.variable;
                    self.assignment.unassign(variable);
                    self.trail.pop();
                    trace!("backtrack: unassign {}", variable);
                }
            }
        }
        false
    }

    fn clear(&mut self) {
        self.assignment.clear();
        self.trail.clear();
    }
}

impl<'a> Solver<'a> {
    pub fn new(formula: &'a Formula) -> Self {
        Self {
            formula,
            state: SolverState::default(),
        }
    }

    /// Runs the search from an empty assignment. Calling this again repeats the same search and
    /// gives the same answer.
    pub fn solve(&mut self) -> SatResult {
        self.state.clear();

        let result = loop {
            match self.status() {
                Status::Satisfied => break SatResult::Satisfiable(self.state.assignment.clone()),
                Status::Conflict => {
                    if !self.state.backtrack() {
                        break SatResult::Unsatisfiable;
                    }
                }
                Status::Undecided => match self.next_unassigned() {
                    Some(variable) => self.state.decide(variable),
                    // Only reachable if some literal mentions a variable outside the formula's
                    // range; treat the branch as failed.
                    None => {
                        if !self.state.backtrack() {
                            break SatResult::Unsatisfiable;
                        }
                    }
                },
            }
        };

        self.state.clear();
        result
    }

    fn status(&self) -> Status {
        let assignment = &self.state.assignment;
        let mut all_satisfied = true;
        for clause in self.formula.clauses() {
            if assignment.satisfies_clause(clause) {
                continue;
            }
            all_satisfied = false;
            if assignment.falsifies_clause(clause) {
                trace!("conflict in {}", clause);
                return Status::Conflict;
            }
        }
        if all_satisfied {
            Status::Satisfied
        } else {
            Status::Undecided
        }
    }

    fn next_unassigned(&self) -> Option<Variable> {
        self.formula
            .variables()
            .find(|v| !self.state.assignment.is_assigned(*v))
    }
}
