use std::fmt;
use std::io::{self, Write};

use rug::{Complete, Integer};

mod power;
mod trial;

pub use power::{Power, Powers};
pub use trial::find_divisor;

// Reasons an input string cannot be factored: not a valid base-10 integer,
// or an integer below 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Parse(String),
    Range,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Parse(text) => {
                write!(f, "\"{}\" does not seem to be a correct integer value", text)
            }
            InputError::Range => write!(f, "only values greater than 0 can be factored"),
        }
    }
}

impl std::error::Error for InputError {}

pub fn parse_input(text: &str) -> Result<Integer, InputError> {
    let n = match Integer::parse(text) {
        Ok(parse) => parse.complete(),
        Err(_) => return Err(InputError::Parse(text.to_string())),
    };
    if n < 1 {
        return Err(InputError::Range);
    }
    Ok(n)
}

// Factors the number written in text into prime powers with strictly
// ascending bases. An input of 1 has no prime factors and yields an empty
// vector.
pub fn factorize(text: &str) -> Result<Vec<Power>, InputError> {
    let n = parse_input(text)?;
    Ok(Powers::new(n).collect())
}

// Writes the factorization of n to out, powers joined by " * " and terminated
// by a newline. Every token is flushed as soon as it is written, so completed
// powers appear while the search for the next divisor is still running.
// n must be at least 1; the factorization of 1 is the literal 1.
pub fn write_factorization<W: Write>(n: &Integer, out: &mut W) -> io::Result<()> {
    if *n == 1 {
        out.write_all(b"1")?;
        out.flush()?;
    }
    for (i, power) in Powers::new(n.clone()).enumerate() {
        if i > 0 {
            out.write_all(b" * ")?;
            out.flush()?;
        }
        write!(out, "{}", power)?;
        out.flush()?;
    }
    out.write_all(b"\n")?;
    out.flush()
}
