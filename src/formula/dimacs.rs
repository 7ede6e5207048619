//! Plain DIMACS CNF: an optional run of `c` comment lines, one `p cnf <vars> <clauses>` line, then
//! clauses as whitespace-separated signed literals each terminated by `0`.

use crate::error::{Error, Result};
use crate::formula::{Clause, Formula, Literal};
use log::debug;
use std::io::{BufRead, BufReader, Read};

pub fn parse<R: Read>(reader: R) -> Result<Formula> {
    let reader = BufReader::new(reader);

    let mut clauses = vec![];
    let mut header = None;
    let mut clause = vec![];

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let mut line = line.split_whitespace().peekable();

        match line.peek() {
            Some(&"c") | None => continue,
            Some(&"%") => break,
            Some(&"p") => {
                if header.is_some() {
                    return Err(Error::parse(line_no, "duplicate 'p' line"));
                }
                let _ = line.next();

                if line.next() != Some("cnf") {
                    return Err(Error::parse(line_no, "missing 'cnf'"));
                }

                let num_variables = line
                    .next()
                    .and_then(|c| c.parse::<usize>().ok())
                    .ok_or_else(|| Error::parse(line_no, "invalid num_variables"))?;

                let num_clauses = line
                    .next()
                    .and_then(|c| c.parse::<usize>().ok())
                    .ok_or_else(|| Error::parse(line_no, "invalid num_clauses"))?;

                header = Some((num_variables, num_clauses));
            }
            Some(_) => {
                let (num_variables, num_clauses) =
                    header.ok_or_else(|| Error::parse(line_no, "missing 'p' line before clauses"))?;

                // clauses may span lines, a 0 ends each one
                for x in line {
                    match parse_literal(x, num_variables, line_no)? {
                        Some(l) => clause.push(l),
                        None => clauses.push(Clause::new(clause.drain(..))),
                    }
                }

                if clauses.len() >= num_clauses {
                    break;
                }
            }
        }
    }

    let (num_variables, num_clauses) = header.ok_or_else(|| Error::parse(1, "missing 'p' line"))?;
    if !clause.is_empty() {
        clauses.push(Clause::new(clause));
    }
    if clauses.len() != num_clauses {
        debug!("header declares {} clauses, read {}", num_clauses, clauses.len());
    }

    Ok(Formula::new(num_variables, clauses))
}

fn parse_literal(s: &str, num_variables: usize, line_no: usize) -> Result<Option<Literal>> {
    let l = s
        .parse::<isize>()
        .map_err(|_| Error::parse(line_no, format!("invalid literal '{}'", s)))?;
    let literal = Literal::from_dimacs(l);
    if let Some(literal) = &literal {
        if literal.idx() > num_variables {
            return Err(Error::parse(
                line_no,
                format!("literal {} out of range for {} variables", l, num_variables),
            ));
        }
    }
    Ok(literal)
}
