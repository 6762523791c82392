use std::process::ExitCode;

fn main() -> ExitCode {
    mediguide::run()
}
