use crate::*;
use log::trace;

/// Tries every total assignment in counting order: variable 1 is the most significant digit and
/// the last variable the least, each going `false` before `true`. Returns the first that
/// satisfies every clause.
pub fn solve_brute_force(f: &Formula) -> SatResult {
    let mut assignment: Assignment = f.variables().map(|v| (v, false)).collect();

    let mut tried = 0u64;
    'search: loop {
        tried += 1;
        for clause in f.clauses() {
            if !assignment.satisfies_clause(clause) {
                // this clause is falsified, so the assignment is bogus
                if next_assignment(f, &mut assignment) {
                    continue 'search;
                }
                break 'search;
            }
        }
        // if we got here, every clause was satisfied
        trace!("brute force: model after {} assignments", tried);
        return SatResult::Satisfiable(assignment);
    }
    trace!("brute force: exhausted {} assignments", tried);
    SatResult::Unsatisfiable
}

/// Advances `assignment` to its successor in counting order. Returns false once every assignment
/// has been visited (the counter wrapped back to all-false).
fn next_assignment(f: &Formula, assignment: &mut Assignment) -> bool {
    for variable in f.variables().rev() {
        if assignment.get(variable) == Some(true) {
            assignment.assign(variable, false);
        } else {
            assignment.assign(variable, true);
            return true;
        }
    }
    false
}
