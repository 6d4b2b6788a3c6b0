use std::process::ExitCode;

fn main() -> ExitCode {
    let result = ringlist::cli::run();

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(ringlist::errors::get_exit_code(&e))
        }
    }
}
