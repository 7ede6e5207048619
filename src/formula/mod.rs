pub mod dimacs;
pub mod instances;

use crate::assignment::Assignment;
use std::fmt::{self, Debug, Display, Formatter};

/// A propositional variable. Variables are numbered from 1.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct Variable(pub usize);

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Literal {
    Positive(Variable),
    Negative(Variable),
}

impl Literal {
    /// Converts a signed DIMACS literal. Zero is the clause terminator, not a literal.
    pub fn from_dimacs(l: isize) -> Option<Self> {
        if l > 0 {
            Some(Literal::Positive(Variable(l as usize)))
        } else if l < 0 {
            Some(Literal::Negative(Variable(l.unsigned_abs())))
        } else {
            None
        }
    }

    pub fn variable(&self) -> &Variable {
        match self {
            Literal::Positive(v) => v,
            Literal::Negative(v) => v,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Positive(_) => true,
            Literal::Negative(_) => false,
        }
    }

    pub fn idx(&self) -> usize {
        self.variable().0
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Literal::Positive(Variable(x)) => write!(f, "{}", x),
            Literal::Negative(Variable(x)) => write!(f, "!{}", x),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(disjuncts: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: disjuncts.into_iter().collect(),
        }
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.literals.len() > 1 {
            f.write_str("(")?;
        }
        let mut first_literal = true;
        for literal in &self.literals {
            if first_literal {
                first_literal = false;
            } else {
                f.write_str(" | ")?;
            }
            write!(f, "{}", literal)?;
        }
        if self.literals.len() > 1 {
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// A CNF formula over the variables `1..=num_variables`.
///
/// Literals are trusted to stay within that range; nothing here checks it. A literal outside the
/// range is never assigned by either solving strategy and so can never be true.
#[derive(Clone)]
pub struct Formula {
    num_variables: usize,
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(num_variables: usize, conjuncts: impl IntoIterator<Item = Clause>) -> Self {
        Self {
            num_variables,
            clauses: conjuncts.into_iter().collect(),
        }
    }

    /// Builds a formula from signed integer clauses, e.g. `[[1, -2], [2]]`. Zeros are dropped.
    pub fn from_dimacs(num_variables: usize, clauses: &[Vec<isize>]) -> Self {
        Self::new(
            num_variables,
            clauses
                .iter()
                .map(|c| Clause::new(c.iter().filter_map(|&l| Literal::from_dimacs(l)))),
        )
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Variables in the order both strategies consider them.
    pub fn variables(&self) -> impl DoubleEndedIterator<Item = Variable> {
        (1..=self.num_variables).map(Variable)
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// True if every clause has a literal made true by `assignment`.
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.clauses.iter().all(|c| assignment.satisfies_clause(c))
    }
}

impl Debug for Formula {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[{} vars] {}", self.num_variables, self)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut first_clause = true;
        for clause in &self.clauses {
            if first_clause {
                first_clause = false;
            } else {
                f.write_str(" & ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn p(x: usize) -> Literal {
    Literal::Positive(Variable(x))
}

#[cfg(test)]
pub(crate) fn n(x: usize) -> Literal {
    Literal::Negative(Variable(x))
}

/// Random formulas with clauses of one to three literals over at most 12 variables.
#[cfg(test)]
pub(crate) fn formula_3sat_strategy() -> impl proptest::strategy::Strategy<Value = Formula> {
    use proptest::prelude::*;

    (1usize..=12).prop_flat_map(|num_variables| {
        let literal = (1..=num_variables, any::<bool>()).prop_map(|(v, positive)| {
            if positive {
                p(v)
            } else {
                n(v)
            }
        });
        let clause = proptest::collection::vec(literal, 1..=3).prop_map(|ls| Clause::new(ls));
        proptest::collection::vec(clause, 1..=20).prop_map(move |clauses| Formula::new(num_variables, clauses))
    })
}
