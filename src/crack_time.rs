//! Brute-force crack time estimation.
//!
//! Assumes an offline attacker making 10^10 guesses per second who, on
//! average, searches half of the keyspace. All arithmetic happens in the
//! log2 domain so `charset^length` is never materialized.

use std::fmt;

const GUESSES_PER_SECOND: f64 = 1e10;

/// Upper bounds (exclusive, in seconds) for every bucket but the last.
const THRESHOLDS: [(f64, CrackTime); 8] = [
    (1.0, CrackTime::Instantly),
    (60.0, CrackTime::Seconds),
    (3_600.0, CrackTime::Minutes),
    (86_400.0, CrackTime::Hours),
    (2_592_000.0, CrackTime::Days),
    (31_536_000.0, CrackTime::Months),
    (3_153_600_000.0, CrackTime::Years),
    (31_536_000_000.0, CrackTime::Centuries),
];

/// Coarse time-to-crack bucket, ordered from fastest to slowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CrackTime {
    /// No password to crack.
    NotApplicable,
    Instantly,
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
    Centuries,
    Millennia,
}

impl CrackTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrackTime::NotApplicable => "-",
            CrackTime::Instantly => "instantly",
            CrackTime::Seconds => "seconds",
            CrackTime::Minutes => "minutes",
            CrackTime::Hours => "hours",
            CrackTime::Days => "days",
            CrackTime::Months => "months",
            CrackTime::Years => "years",
            CrackTime::Centuries => "centuries",
            CrackTime::Millennia => "millennia",
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps `entropy_bits` (`length * log2(charset)`) to a crack time bucket.
pub fn estimate_crack_time(entropy_bits: f64) -> CrackTime {
    let log2_seconds = entropy_bits - (GUESSES_PER_SECOND * 2.0).log2();
    THRESHOLDS
        .iter()
        .find(|(limit, _)| log2_seconds < limit.log2())
        .map(|&(_, bucket)| bucket)
        .unwrap_or(CrackTime::Millennia)
}

/// Convenience wrapper taking the raw keyspace parameters.
pub fn crack_time_for(charset_size: u32, length: usize) -> CrackTime {
    if charset_size == 0 || length == 0 {
        return CrackTime::Instantly;
    }
    estimate_crack_time(length as f64 * (charset_size as f64).log2())
}
