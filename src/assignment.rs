use crate::formula::{Clause, Literal, Variable};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::iter::FromIterator;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Value {
    True,
    False,
    Undecided,
}

/// A partial assignment of truth values to variables. Variables missing from the map are
/// unassigned. Iteration is in ascending variable order.
///
/// A satisfying total assignment returned by a solver is a model.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Assignment {
    values: BTreeMap<Variable, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, variable: Variable, value: bool) {
        self.values.insert(variable, value);
    }

    pub fn unassign(&mut self, variable: Variable) {
        self.values.remove(&variable);
    }

    pub fn get(&self, variable: Variable) -> Option<bool> {
        self.values.get(&variable).copied()
    }

    pub fn is_assigned(&self, variable: Variable) -> bool {
        self.values.contains_key(&variable)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.values.iter().map(|(v, b)| (*v, *b))
    }

    /// The value `literal` currently takes, accounting for its polarity.
    pub fn value_of(&self, literal: &Literal) -> Value {
        match self.get(*literal.variable()) {
            None => Value::Undecided,
            Some(b) if b == literal.is_positive() => Value::True,
            Some(_) => Value::False,
        }
    }

    /// An unassigned literal is not true.
    pub fn satisfies_literal(&self, literal: &Literal) -> bool {
        self.value_of(literal) == Value::True
    }

    /// True if some literal of `clause` is true. Never true for the empty clause.
    pub fn satisfies_clause(&self, clause: &Clause) -> bool {
        clause.literals().any(|l| self.satisfies_literal(l))
    }

    /// True if no extension of this assignment can satisfy `clause`: no literal is true and none
    /// is unassigned. Always true for the empty clause.
    pub fn falsifies_clause(&self, clause: &Clause) -> bool {
        let mut has_unassigned = false;
        for literal in clause.literals() {
            match self.value_of(literal) {
                Value::True => return false,
                Value::Undecided => has_unassigned = true,
                Value::False => continue,
            }
        }
        !has_unassigned
    }
}

impl FromIterator<(Variable, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Variable, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Renders as a mapping literal, e.g. `{1: True, 2: False}`, or `{}` when empty.
impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("{")?;
        let mut first = true;
        for (variable, value) in self.iter() {
            if first {
                first = false;
            } else {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", variable, if value { "True" } else { "False" })?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p};

    fn assignment(values: &[(usize, bool)]) -> Assignment {
        values.iter().map(|&(v, b)| (Variable(v), b)).collect()
    }

    #[test]
    fn literal_polarity() {
        let a = assignment(&[(1, true), (2, false)]);
        assert!(a.satisfies_literal(&p(1)));
        assert!(!a.satisfies_literal(&n(1)));
        assert!(!a.satisfies_literal(&p(2)));
        assert!(a.satisfies_literal(&n(2)));
        assert!(!a.satisfies_literal(&p(3)));
        assert!(!a.satisfies_literal(&n(3)));
        assert_eq!(a.value_of(&n(3)), Value::Undecided);
    }

    #[test]
    fn clause_satisfied() {
        let a = assignment(&[(1, false)]);
        assert!(a.satisfies_clause(&Clause::new(vec![p(1), n(1)])));
        assert!(!a.satisfies_clause(&Clause::new(vec![p(1), p(2)])));
        assert!(!a.satisfies_clause(&Clause::new(vec![])));
        assert!(!Assignment::new().satisfies_clause(&Clause::new(vec![])));
    }

    #[test]
    fn clause_falsified() {
        let a = assignment(&[(1, false), (2, true)]);
        // all assigned, none true
        assert!(a.falsifies_clause(&Clause::new(vec![p(1), n(2)])));
        // one literal true
        assert!(!a.falsifies_clause(&Clause::new(vec![p(1), p(2)])));
        // an unassigned variable could still flip it
        assert!(!a.falsifies_clause(&Clause::new(vec![p(1), p(3)])));
        // true literal after an unassigned one
        assert!(!a.falsifies_clause(&Clause::new(vec![p(3), n(1)])));
        assert!(a.falsifies_clause(&Clause::new(vec![])));
        assert!(Assignment::new().falsifies_clause(&Clause::new(vec![])));
    }

    #[test]
    fn assign_and_unassign() {
        let mut a = Assignment::new();
        a.assign(Variable(2), true);
        a.assign(Variable(1), false);
        assert_eq!(a.get(Variable(2)), Some(true));
        assert_eq!(a.len(), 2);
        a.unassign(Variable(2));
        assert!(!a.is_assigned(Variable(2)));
        assert_eq!(a, assignment(&[(1, false)]));
    }

    #[test]
    fn display() {
        assert_eq!(Assignment::new().to_string(), "{}");
        let a = assignment(&[(2, false), (1, true), (10, false)]);
        assert_eq!(a.to_string(), "{1: True, 2: False, 10: False}");
    }
}
