use std::fmt;
use std::mem;

use log::debug;
use rug::Integer;

use crate::trial;

// A prime power base^exp in a factorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Power {
    pub base: Integer,
    pub exp: u32,
}

// A first power prints as the bare base, higher powers as "(base^exp)".
impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exp == 1 {
            write!(f, "{}", self.base)
        } else {
            write!(f, "({}^{})", self.base, self.exp)
        }
    }
}

// Iterator over the prime powers of a number, smallest base first. Each call
// to next extracts divisors from the remaining dividend until the smallest
// divisor changes, so a power is yielded as soon as it is complete, long
// before the factorization as a whole is known.
pub struct Powers {
    dividend: Integer,
}

impl Powers {
    pub fn new(dividend: Integer) -> Powers {
        Powers { dividend }
    }
}

impl Iterator for Powers {
    type Item = Power;

    fn next(&mut self) -> Option<Power> {
        if self.dividend < 2 {
            return None;
        }

        let base = match trial::find_divisor(&self.dividend) {
            Some(divisor) => divisor,
            None => {
                // The dividend itself is prime and closes the factorization.
                let base = mem::replace(&mut self.dividend, Integer::from(1));
                let power = Power { base, exp: 1 };
                debug!("extracted {}", power);
                return Some(power);
            }
        };
        self.dividend.div_exact_mut(&base);
        let mut exp = 1;

        loop {
            match trial::find_divisor(&self.dividend) {
                Some(divisor) if divisor == base => {
                    self.dividend.div_exact_mut(&base);
                    exp += 1;
                }
                Some(_) => {
                    // A larger divisor starts the next run; it is found again
                    // on the next call.
                    break;
                }
                None => {
                    if self.dividend == base {
                        // The prime residue extends the current run.
                        self.dividend = Integer::from(1);
                        exp += 1;
                    }
                    break;
                }
            }
        }

        let power = Power { base, exp };
        debug!("extracted {}", power);
        Some(power)
    }
}
