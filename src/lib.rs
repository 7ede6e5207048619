pub mod assignment;
pub mod brute_force;
pub mod error;
pub mod formula;
pub mod report;
pub mod runner;
pub mod solver;

pub use assignment::{Assignment, Value};
pub use error::{Error, Result};
pub use formula::instances::Instance;
pub use formula::{Clause, Formula, Literal, Variable};
pub use runner::{solve_with, Method, Record};
pub use solver::Solver;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum SatResult {
    Satisfiable(Assignment),
    Unsatisfiable,
}

impl SatResult {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatResult::Satisfiable(_))
    }

    /// The witness, or an empty assignment when unsatisfiable.
    pub fn model(&self) -> Assignment {
        match self {
            SatResult::Satisfiable(model) => model.clone(),
            SatResult::Unsatisfiable => Assignment::new(),
        }
    }
}

/// Exhaustive search; returns the first model in enumeration order.
pub fn solve_bruteforce(f: &Formula) -> SatResult {
    brute_force::solve_brute_force(f)
}

/// Backtracking search with clause pruning; returns the first model found trying `true` before
/// `false` on the lowest unassigned variable.
pub fn solve_backtracking(f: &Formula) -> SatResult {
    Solver::new(f).solve()
}

#[cfg(test)]
mod tests {
    use super::{solve_backtracking, solve_bruteforce, Assignment, Formula, SatResult, Solver, Variable};
    use crate::formula::formula_3sat_strategy;
    use proptest::prelude::*;

    fn model(values: &[(usize, bool)]) -> Assignment {
        values.iter().map(|&(v, b)| (Variable(v), b)).collect()
    }

    #[test]
    fn trivial_formula() {
        let f = Formula::new(0, vec![]);
        assert_eq!(solve_bruteforce(&f), SatResult::Satisfiable(Assignment::new()));
        assert_eq!(solve_backtracking(&f), SatResult::Satisfiable(Assignment::new()));
    }

    #[test]
    fn empty_clause_is_unsat() {
        for f in &[
            Formula::from_dimacs(0, &[vec![]]),
            Formula::from_dimacs(2, &[vec![1, 2], vec![]]),
            Formula::from_dimacs(3, &[vec![], vec![-3]]),
        ] {
            assert_eq!(solve_bruteforce(f), SatResult::Unsatisfiable);
            assert_eq!(solve_backtracking(f), SatResult::Unsatisfiable);
        }
    }

    #[test]
    fn witness_order() {
        let f = Formula::from_dimacs(2, &[vec![1, 2], vec![-1, -2]]);
        assert_eq!(
            solve_bruteforce(&f),
            SatResult::Satisfiable(model(&[(1, false), (2, true)]))
        );
        assert_eq!(
            solve_backtracking(&f),
            SatResult::Satisfiable(model(&[(1, true), (2, false)]))
        );
    }

    #[test]
    fn unit_clauses() {
        let f = Formula::from_dimacs(1, &[vec![1]]);
        assert_eq!(solve_bruteforce(&f), SatResult::Satisfiable(model(&[(1, true)])));
        assert_eq!(solve_backtracking(&f), SatResult::Satisfiable(model(&[(1, true)])));

        let f = Formula::from_dimacs(1, &[vec![1], vec![-1]]);
        for result in &[solve_bruteforce(&f), solve_backtracking(&f)] {
            assert_eq!(*result, SatResult::Unsatisfiable);
            assert!(!result.is_satisfiable());
            assert!(result.model().is_empty());
        }
    }

    proptest! {
        #[test]
        fn strategies_agree(f in formula_3sat_strategy()) {
            let brute_force = solve_bruteforce(&f);
            let backtracking = solve_backtracking(&f);
            prop_assert_eq!(brute_force.is_satisfiable(), backtracking.is_satisfiable());
        }

        #[test]
        fn models_are_sound(f in formula_3sat_strategy()) {
            for result in vec![solve_bruteforce(&f), solve_backtracking(&f)] {
                if let SatResult::Satisfiable(model) = result {
                    prop_assert!(f.is_satisfied_by(&model));
                    prop_assert!(model.len() <= f.num_variables());
                }
            }
        }

        #[test]
        fn repeated_solves_match(f in formula_3sat_strategy()) {
            prop_assert_eq!(solve_bruteforce(&f), solve_bruteforce(&f));
            let mut solver = Solver::new(&f);
            let first = solver.solve();
            prop_assert_eq!(solver.solve(), first.clone());
            prop_assert_eq!(solve_backtracking(&f), first);
        }
    }
}
