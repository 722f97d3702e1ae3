//! The permitted acquisition frequencies and their divisors

use crate::BASE_FREQUENCY;

/// Officially supported channel frequencies in Hz, fastest first
pub const FREQUENCY_TABLE: [u32; 10] = [1000, 500, 200, 100, 50, 20, 10, 5, 2, 1];

/// Divisors matching [`FREQUENCY_TABLE`] entry for entry
pub const DIVISOR_TABLE: [u32; 10] = [
    BASE_FREQUENCY / 1000,
    BASE_FREQUENCY / 500,
    BASE_FREQUENCY / 200,
    BASE_FREQUENCY / 100,
    BASE_FREQUENCY / 50,
    BASE_FREQUENCY / 20,
    BASE_FREQUENCY / 10,
    BASE_FREQUENCY / 5,
    BASE_FREQUENCY / 2,
    BASE_FREQUENCY / 1,
];

/// Ticks between two samples of a channel running at `frequency`.
/// Truncates for frequencies that don't divide the base frequency.
/// `frequency` must be non-zero.
pub fn divisor(frequency: u32) -> u32 {
    BASE_FREQUENCY / frequency
}

/// Effective frequency of a channel with the given divisor
pub fn frequency(divisor: u32) -> u32 {
    BASE_FREQUENCY / divisor
}

pub fn is_supported(frequency: u32) -> bool {
    FREQUENCY_TABLE.contains(&frequency)
}
