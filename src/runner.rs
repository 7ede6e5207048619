use crate::error::{Error, Result};
use crate::formula::instances::Instance;
use crate::formula::Formula;
use crate::{solve_backtracking, solve_bruteforce, SatResult};
use log::info;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::Instant;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Method {
    BruteForce,
    Backtracking,
    /// Reserved name with no algorithm behind it.
    BestCase,
    /// Reserved name with no algorithm behind it.
    Simple,
}

impl Method {
    /// Every spelling `from_str` accepts, ignoring case.
    pub const ACCEPTED: &'static [&'static str] = &["bruteforce", "brute-force", "backtracking", "bestcase", "simple"];
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Method::BruteForce => "BruteForce",
            Method::Backtracking => "Backtracking",
            Method::BestCase => "BestCase",
            Method::Simple => "Simple",
        })
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bruteforce" | "brute-force" => Ok(Method::BruteForce),
            "backtracking" => Ok(Method::Backtracking),
            "bestcase" => Ok(Method::BestCase),
            "simple" => Ok(Method::Simple),
            _ => Err(format!("unknown method '{}'", s)),
        }
    }
}

/// Solves `f` with `method`. Methods without an algorithm report [`Error::Unimplemented`] rather
/// than a verdict.
pub fn solve_with(method: Method, f: &Formula) -> Result<SatResult> {
    match method {
        Method::BruteForce => Ok(solve_bruteforce(f)),
        Method::Backtracking => Ok(solve_backtracking(f)),
        Method::BestCase | Method::Simple => Err(Error::Unimplemented(method)),
    }
}

/// The outcome of solving one instance.
#[derive(Clone, Debug)]
pub struct Record {
    pub instance_id: String,
    pub num_variables: usize,
    pub num_clauses: usize,
    pub method: Method,
    pub result: SatResult,
    /// Wall-clock time of the solve call alone.
    pub time_seconds: f64,
}

pub fn run_instance(instance: &Instance, method: Method) -> Result<Record> {
    let f = &instance.formula;

    let start = Instant::now();
    let result = solve_with(method, f)?;
    let time_seconds = start.elapsed().as_secs_f64();

    debug_assert!(
        match &result {
            SatResult::Satisfiable(model) => f.is_satisfied_by(model),
            SatResult::Unsatisfiable => true,
        },
        "{} returned a bad model for instance {}",
        method,
        instance.id
    );
    info!(
        "instance {}: {} in {:.6}s ({})",
        instance.id,
        if result.is_satisfiable() { "SAT" } else { "UNSAT" },
        time_seconds,
        method
    );

    Ok(Record {
        instance_id: instance.id.clone(),
        num_variables: f.num_variables(),
        num_clauses: f.num_clauses(),
        method,
        result,
        time_seconds,
    })
}

pub fn run(instances: &[Instance], method: Method) -> Result<Vec<Record>> {
    instances.iter().map(|i| run_instance(i, method)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::instances;
    use test_env_log::test;

    #[test]
    fn method_names() {
        for &method in &[Method::BruteForce, Method::Backtracking, Method::BestCase, Method::Simple] {
            assert_eq!(method.to_string().parse::<Method>(), Ok(method));
        }
        assert_eq!("BruteForce".parse::<Method>(), Ok(Method::BruteForce));
        assert_eq!("brute-force".parse::<Method>(), Ok(Method::BruteForce));
        for name in Method::ACCEPTED {
            assert!(name.parse::<Method>().is_ok(), "{} should parse", name);
        }
        assert!("dpll".parse::<Method>().is_err());
    }

    #[test]
    fn unimplemented_methods() {
        let f = Formula::from_dimacs(1, &[vec![1]]);
        for &method in &[Method::BestCase, Method::Simple] {
            match solve_with(method, &f) {
                Err(Error::Unimplemented(m)) => assert_eq!(m, method),
                other => panic!("unexpected {:?}", other),
            }
        }
        assert_eq!(solve_with(Method::BruteForce, &f).unwrap(), solve_bruteforce(&f));
    }

    #[test]
    fn run_records() {
        let input = "c 1 3 ?\np cnf 3 3\n1,2\n2,3\n1,3\nc 2 2 ?\np cnf 2 1\n1,2\n";
        let parsed = instances::parse(input.as_bytes()).unwrap();
        let records = run(&parsed, Method::Backtracking).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].instance_id, "1");
        assert_eq!(records[0].num_variables, 3);
        assert_eq!(records[0].num_clauses, 3);
        assert_eq!(records[0].method, Method::Backtracking);
        assert_eq!(records[0].result.model().to_string(), "{1: True, 2: True}");
        assert_eq!(records[1].result.model().to_string(), "{1: True}");
        assert!(records.iter().all(|r| r.time_seconds >= 0.0));

        assert!(matches!(
            run(&parsed, Method::Simple),
            Err(Error::Unimplemented(Method::Simple))
        ));
    }
}
