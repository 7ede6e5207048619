use clap::{value_t, App, Arg};
use log::info;
use satsolve::formula::{dimacs, instances};
use satsolve::{report, runner, Instance, Method, Result};
use std::fs::File;
use std::io::BufWriter;

fn app() -> App<'static, 'static> {
    App::new("satsolve")
        .about("Decides satisfiability of CNF instances and writes a results table")
        .arg(
            Arg::with_name("INPUT")
                .help("input file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("method")
                .short("m")
                .long("method")
                .help("solving method")
                .takes_value(true)
                .possible_values(Method::ACCEPTED)
                .case_insensitive(true)
                .default_value("backtracking"),
        )
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .help("input format: multi-instance graph file or a single DIMACS CNF")
                .takes_value(true)
                .possible_values(&["instances", "dimacs"])
                .default_value("instances"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .help("results CSV file")
                .takes_value(true)
                .default_value("resultsfile.csv"),
        )
}

fn main() {
    env_logger::init();

    let matches = app().get_matches();

    let method = value_t!(matches, "method", Method).unwrap_or_else(|e| e.exit());
    // all three have defaults or are required
    let input = matches.value_of("INPUT").unwrap_or_default();
    let format = matches.value_of("format").unwrap_or("instances");
    let output = matches.value_of("output").unwrap_or("resultsfile.csv");

    if let Err(e) = run(input, format, method, output) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(input: &str, format: &str, method: Method, output: &str) -> Result<()> {
    let file = File::open(input)?;
    let instances = match format {
        "dimacs" => vec![Instance::single(dimacs::parse(file)?)],
        _ => instances::parse(file)?,
    };
    info!("read {} instances from {}", instances.len(), input);

    let records = runner::run(&instances, method)?;

    let out = BufWriter::new(File::create(output)?);
    report::write_results(out, &records)?;
    info!("wrote {} rows to {}", records.len(), output);
    Ok(())
}
