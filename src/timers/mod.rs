//! Nested phase timers.

mod timers;
pub(crate) use timers::*;
