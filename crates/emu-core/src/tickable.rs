//! Trait for components that can be advanced by clock ticks.

use crate::Ticks;

/// A component advanced one clock cycle at a time.
pub trait Tickable {
    /// Advance the component by one clock cycle.
    fn tick(&mut self);

    /// Advance the component by `count` cycles.
    ///
    /// Must produce the same result as calling `tick()` `count` times.
    fn tick_n(&mut self, count: Ticks) {
        for _ in 0..count.get() {
            self.tick();
        }
    }
}
