use std::process::ExitCode;

fn main() -> ExitCode {
    advisr_cli::run()
}
