use std::process::ExitCode;

fn main() -> ExitCode {
    coverly_cli::run()
}
