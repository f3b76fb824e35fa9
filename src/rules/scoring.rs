//! Completion scoring and the final win decision.

use crate::core::{Inventory, Status};

/// Points for the `nth` completion (1-based) at hex-distance `distance`
/// from the center.
///
/// - `d ≤ 1`: `20 - ceil((i-1)/2)`
/// - `d > 1`: `22 - 2d - ceil((i-1)/(d+1))`
///
/// Never negative.
///
/// ```
/// use rust_psynth::rules::completion_points;
///
/// assert_eq!(completion_points(0, 1), 20);
/// assert_eq!(completion_points(0, 2), 19);
/// assert_eq!(completion_points(2, 1), 18);
/// ```
#[must_use]
pub fn completion_points(distance: u32, nth: u32) -> u32 {
    let earlier = nth.saturating_sub(1);
    if distance <= 1 {
        20u32.saturating_sub(earlier.div_ceil(2))
    } else {
        22u32
            .saturating_sub(2 * distance)
            .saturating_sub(earlier.div_ceil(distance + 1))
    }
}

/// Decide the game once the sun has completed its last revolution.
///
/// More points wins; equal points go to more energy; a complete tie goes
/// to Blue, the player who moved second.
#[must_use]
pub fn decide_winner(red: &Inventory, blue: &Inventory) -> Status {
    use std::cmp::Ordering;

    match red.points().cmp(&blue.points()) {
        Ordering::Greater => Status::RedWin,
        Ordering::Less => Status::BlueWin,
        Ordering::Equal => {
            if red.energy() > blue.energy() {
                Status::RedWin
            } else {
                Status::BlueWin
            }
        }
    }
}
