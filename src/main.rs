use std::process::ExitCode;

fn main() -> ExitCode {
    match deploycheck::cli::run() {
        Ok(verdict) => ExitCode::from(verdict.exit_code()),
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(deploycheck::errors::get_exit_code(&e))
        }
    }
}
