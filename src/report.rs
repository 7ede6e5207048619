//! The results table: one CSV row per solved instance.

use crate::error::Result;
use crate::runner::Record;
use std::borrow::Cow;
use std::io::Write;

pub const HEADER: &[&str] = &[
    "instance_id",
    "n_vars",
    "n_clauses",
    "method",
    "satisfiable",
    "time_seconds",
    "solution",
];

pub fn write_results<W: Write>(mut writer: W, records: &[Record]) -> Result<()> {
    writeln!(writer, "{}", HEADER.join(","))?;
    for record in records {
        write_record(&mut writer, record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_record<W: Write>(writer: &mut W, record: &Record) -> Result<()> {
    let fields = [
        record.instance_id.clone(),
        record.num_variables.to_string(),
        record.num_clauses.to_string(),
        record.method.to_string(),
        if record.result.is_satisfiable() { "1" } else { "0" }.to_string(),
        record.time_seconds.to_string(),
        record.result.model().to_string(),
    ];
    let row = fields.iter().map(|f| quote(f)).collect::<Vec<_>>().join(",");
    writeln!(writer, "{}", row)?;
    Ok(())
}

/// Quotes a field if it holds a separator, a quote or a line break. Inner quotes are doubled.
fn quote(field: &str) -> Cow<str> {
    if field.contains(|c: char| c == ',' || c == '"' || c == '\n' || c == '\r') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::Method;
    use crate::{Assignment, SatResult, Variable};

    fn record(id: &str, result: SatResult) -> Record {
        Record {
            instance_id: id.to_string(),
            num_variables: 4,
            num_clauses: 10,
            method: Method::BruteForce,
            result,
            time_seconds: 0.25,
        }
    }

    #[test]
    fn quoting() {
        assert_eq!(quote("{}"), "{}");
        assert_eq!(quote("{1: True, 2: False}"), "\"{1: True, 2: False}\"");
        assert_eq!(quote("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn write_table() {
        let model: Assignment = vec![
            (Variable(1), true),
            (Variable(2), false),
            (Variable(3), false),
            (Variable(4), false),
        ]
        .into_iter()
        .collect();
        let records = vec![
            record("3", SatResult::Unsatisfiable),
            record("4", SatResult::Satisfiable(model)),
        ];

        let mut out = vec![];
        write_results(&mut out, &records).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "instance_id,n_vars,n_clauses,method,satisfiable,time_seconds,solution\n\
             3,4,10,BruteForce,0,0.25,{}\n\
             4,4,10,BruteForce,1,0.25,\"{1: True, 2: False, 3: False, 4: False}\"\n"
        );
    }

    #[test]
    fn write_empty_table() {
        let mut out = vec![];
        write_results(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", HEADER.join(",")));
    }
}
