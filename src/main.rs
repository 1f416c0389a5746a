use clap::Parser;

use make_utils::cli::{orchestration, Args};

fn main() {
    let args = Args::parse();

    if let Err(err) = orchestration::run(args) {
        std::process::exit(orchestration::report(&err));
    }
}
