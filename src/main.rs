use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use log::debug;
use rug::Integer;

use primefac::{parse_input, write_factorization};

fn print_factorization(text: &str, dividend: &Integer, out: &mut impl Write) -> io::Result<()> {
    // The argument is echoed verbatim, so "007" prints as "007 = 7".
    write!(out, "{} = ", text)?;
    out.flush()?;
    write_factorization(dividend, out)
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let text = match (args.next(), args.next()) {
        (Some(text), None) => text,
        _ => {
            eprintln!("Fatal error: expected exactly one integer argument");
            return ExitCode::FAILURE;
        }
    };

    let dividend = match parse_input(&text) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Fatal error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    debug!("factoring {}", dividend);

    match print_factorization(&text, &dividend, &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}
