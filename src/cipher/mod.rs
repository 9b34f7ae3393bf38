// Mon Jan 19 2026 - Alex

pub mod shift;
pub mod bruteforce;

pub use shift::{encode, decode, shift_char, ALPHABET_SIZE};
pub use bruteforce::{bruteforce, Candidate, KEY_SPACE};
