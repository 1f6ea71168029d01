use std::process::ExitCode;

fn main() -> ExitCode {
    storeterms_cli::run()
}
