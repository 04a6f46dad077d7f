//! # Kata Module
//!
//! Warm-up exercises kept alongside the real business logic. They carry no
//! store semantics, but they share the same testing discipline as the rest
//! of the crate.

// =============================================================================
// FizzBuzz
// =============================================================================

/// The classic FizzBuzz kata.
///
/// ## Rules
/// - Divisible by 3 and 5: "FizzBuzz"
/// - Divisible by 3: "Fizz"
/// - Divisible by 5: "Buzz"
/// - Otherwise: the number itself, as a string
pub fn fizz_buzz(n: i64) -> String {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => "FizzBuzz".to_string(),
        (true, false) => "Fizz".to_string(),
        (false, true) => "Buzz".to_string(),
        (false, false) => n.to_string(),
    }
}

// =============================================================================
// Max
// =============================================================================

/// Returns the greater of two values; the second on ties.
pub fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
