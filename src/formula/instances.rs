//! Multi-instance graph files. Each instance is a header comment, a problem line and one edge per
//! line:
//!
//! ```text
//! c 1 3 ?
//! p cnf 4 5
//! 1,2
//! 1,3
//! 2,3
//! 2,4
//! 3,4
//! ```
//!
//! The comment carries the instance id, a `k` parameter and an optional expected status. The
//! problem line gives the number of vertices and edges. Every vertex becomes a variable and every
//! edge `u,v` the clause `u | v`.

use crate::error::{Error, Result};
use crate::formula::{Clause, Formula, Literal, Variable};
use log::{debug, warn};
use std::io::{BufRead, BufReader, Read};

#[derive(Clone, Debug)]
pub struct Instance {
    pub id: String,
    pub k: Option<usize>,
    /// Expected status as written in the file, e.g. `?`, `S` or `U`.
    pub status: Option<String>,
    pub formula: Formula,
}

impl Instance {
    /// Wraps a lone formula, e.g. one read from a plain DIMACS file.
    pub fn single(formula: Formula) -> Self {
        Self {
            id: "1".to_string(),
            k: None,
            status: None,
            formula,
        }
    }
}

/// An instance whose header has been read but whose edges are still coming in.
struct Pending {
    id: String,
    k: Option<usize>,
    status: Option<String>,
    line: usize,
    shape: Option<Shape>,
    clauses: Vec<Clause>,
}

#[derive(Clone, Copy)]
struct Shape {
    num_vertices: usize,
    num_edges: usize,
}

impl Pending {
    fn is_complete(&self) -> bool {
        match self.shape {
            Some(shape) => self.clauses.len() >= shape.num_edges,
            None => false,
        }
    }

    fn finish(self) -> Result<Instance> {
        let shape = match self.shape {
            Some(shape) => shape,
            None => return Err(Error::parse(self.line, format!("instance {} has no 'p' line", self.id))),
        };
        if self.clauses.len() < shape.num_edges {
            return Err(Error::parse(
                self.line,
                format!(
                    "instance {} declares {} edges but has {}",
                    self.id,
                    shape.num_edges,
                    self.clauses.len()
                ),
            ));
        }
        debug!(
            "instance {}: {} vertices, {} edges",
            self.id, shape.num_vertices, shape.num_edges
        );
        Ok(Instance {
            id: self.id,
            k: self.k,
            status: self.status,
            formula: Formula::new(shape.num_vertices, self.clauses),
        })
    }
}

pub fn parse<R: Read>(reader: R) -> Result<Vec<Instance>> {
    let reader = BufReader::new(reader);

    let mut instances = vec![];
    let mut pending: Option<Pending> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("c") => {
                let id = match tokens.next() {
                    Some(id) => id.to_string(),
                    // a bare comment
                    None => continue,
                };
                if let Some(p) = pending.take() {
                    if !p.is_complete() {
                        return Err(Error::parse(
                            line_no,
                            format!("instance {} starts before instance {} is complete", id, p.id),
                        ));
                    }
                    instances.push(p.finish()?);
                }
                let k = tokens
                    .next()
                    .map(|k| {
                        k.parse::<usize>()
                            .map_err(|_| Error::parse(line_no, format!("invalid k '{}'", k)))
                    })
                    .transpose()?;
                let status = tokens.next().map(str::to_string);
                pending = Some(Pending {
                    id,
                    k,
                    status,
                    line: line_no,
                    shape: None,
                    clauses: vec![],
                });
            }
            Some("p") => {
                let p = pending
                    .as_mut()
                    .ok_or_else(|| Error::parse(line_no, "'p' line without an instance header"))?;
                if p.shape.is_some() {
                    return Err(Error::parse(line_no, format!("duplicate 'p' line in instance {}", p.id)));
                }
                if tokens.next() != Some("cnf") {
                    return Err(Error::parse(line_no, "missing 'cnf'"));
                }
                let num_vertices = tokens
                    .next()
                    .and_then(|c| c.parse::<usize>().ok())
                    .ok_or_else(|| Error::parse(line_no, "invalid number of vertices"))?;
                let num_edges = tokens
                    .next()
                    .and_then(|c| c.parse::<usize>().ok())
                    .ok_or_else(|| Error::parse(line_no, "invalid number of edges"))?;
                p.shape = Some(Shape {
                    num_vertices,
                    num_edges,
                });
            }
            Some(_) => {
                let p = pending
                    .as_mut()
                    .ok_or_else(|| Error::parse(line_no, "edge before any instance header"))?;
                let shape = p
                    .shape
                    .ok_or_else(|| Error::parse(line_no, format!("edge before 'p' line in instance {}", p.id)))?;
                if p.is_complete() {
                    warn!("line {}: ignoring extra edge in instance {}", line_no, p.id);
                    continue;
                }
                p.clauses.push(parse_edge(line, shape.num_vertices, line_no)?);
            }
            None => continue,
        }
    }

    if let Some(p) = pending {
        instances.push(p.finish()?);
    }
    Ok(instances)
}

fn parse_edge(line: &str, num_vertices: usize, line_no: usize) -> Result<Clause> {
    let mut endpoints = line.split(',');
    let mut vertex = || -> Result<Literal> {
        let token = endpoints
            .next()
            .map(str::trim)
            .ok_or_else(|| Error::parse(line_no, format!("expected 'u,v', got '{}'", line)))?;
        let v = token
            .parse::<usize>()
            .map_err(|_| Error::parse(line_no, format!("invalid vertex '{}'", token)))?;
        if v == 0 || v > num_vertices {
            return Err(Error::parse(
                line_no,
                format!("vertex {} out of range 1..={}", v, num_vertices),
            ));
        }
        Ok(Literal::Positive(Variable(v)))
    };
    let u = vertex()?;
    let v = vertex()?;
    if endpoints.next().is_some() {
        return Err(Error::parse(line_no, format!("expected 'u,v', got '{}'", line)));
    }
    Ok(Clause::new(vec![u, v]))
}
