use std::process::ExitCode;

/// Exit status for any failure, the `-1` of a POSIX shell.
const FAILURE_EXIT_CODE: u8 = 255;

fn main() -> ExitCode {
    match resptime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}
