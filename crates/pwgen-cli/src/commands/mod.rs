pub mod generate;
pub mod symbols;

use std::io::Write;
use std::process::ExitCode;

use pwgen_core::Error;

const PROGRAM_NAME: &str = "pwgen";

/// Report the outcome of a command on `err` and turn it into an exit code.
pub fn exit_code(result: pwgen_core::Result<()>, err: &mut dyn Write) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // stderr may be closed too; nothing left to report to.
            let _ = writeln!(err, "{}", describe(&e));
            ExitCode::FAILURE
        }
    }
}

/// User-facing message for a failed run.
pub fn describe(error: &Error) -> String {
    match error {
        Error::UnknownSymbolSet(_) => format!(
            "{PROGRAM_NAME}: {error}\nTry `{PROGRAM_NAME} --help` or `{PROGRAM_NAME} --symbols=help`"
        ),
        _ => format!("{PROGRAM_NAME}: {error}"),
    }
}
