use std::process;
use tunproxy::cli::CLI;

fn main() {
    // Parse arguments and run the selected role
    let cli = CLI::new();

    if let Err(err) = cli.execute() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
