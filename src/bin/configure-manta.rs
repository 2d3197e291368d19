use manta_config::app;
use manta_config::config::ConfigError;
use manta_config::shared::logging::init_tracing;

const USER_ERROR_EXIT_CODE: i32 = 2;

fn run() -> Result<(), ConfigError> {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let output = app::run_cli(args)?;
    println!("{output}");
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        if err.is_user_error() {
            eprintln!("run with --help for usage");
            std::process::exit(USER_ERROR_EXIT_CODE);
        }
        std::process::exit(1);
    }
}
