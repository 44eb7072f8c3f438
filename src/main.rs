use std::env::args_os;
use std::io;
use std::process::ExitCode;

use static_huffman::{encode_inputs, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let mut stdout = io::stdout().lock();
    match encode_inputs(&arguments, &mut stdout) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            eprintln!("{} inputs could not be encoded", failures);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Encoding failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
