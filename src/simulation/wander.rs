//! Random wandering for objects without a controller.
use rand::Rng;

use crate::direction::Direction;

/// Direction a wandering object keeps pushing in, and how long it has.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wander {
    frames: u32,
    direction: Direction,
}

impl Default for Wander {
    fn default() -> Self {
        Self {
            frames: 0,
            direction: Direction::Up,
        }
    }
}

impl Wander {
    /// Direction to push in this frame.
    ///
    /// A fresh direction is drawn on the first call and then every `period`
    /// frames; in between the previous one is repeated.
    pub fn next(&mut self, rng: &mut impl Rng, period: u32) -> Direction {
        if self.frames % period.max(1) == 0 {
            self.frames = 0;
            self.direction = Direction::random(rng);
        }
        self.frames += 1;
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn direction_holds_for_a_period() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        let mut wander = Wander::default();
        let first = wander.next(&mut rng, 3);
        assert_eq!(wander.next(&mut rng, 3), first);
        assert_eq!(wander.next(&mut rng, 3), first);
        assert_eq!(wander.frames, 3);
        wander.next(&mut rng, 3);
        assert_eq!(wander.frames, 1);
    }
}
