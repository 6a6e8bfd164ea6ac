//! Stream combinators for subscriber-side rate control.

mod throttle;

pub use throttle::{Throttle, ThrottleExt};
