use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{value_parser, Arg, Command};
use hotpath_bench::{init_logging, Rectangle};

fn main() -> ExitCode {
    init_logging();
    let matches = Command::new("rectangle")
        .about("Calculate rectangle area from YAML file")
        .arg(
            Arg::new("yaml-file")
                .help("Path to YAML file containing rectangle coordinates")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .get_matches();

    let Some(path) = matches.get_one::<PathBuf>("yaml-file") else {
        return ExitCode::FAILURE;
    };

    let start = Instant::now();
    let rect = match Rectangle::load(path) {
        Ok(rect) => rect,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let area = rect.area();
    let elapsed = start.elapsed();

    println!("Rectangle area: {area:.2}");
    println!("Time: {:.6} ms", elapsed.as_secs_f64() * 1000.0);
    ExitCode::SUCCESS
}
