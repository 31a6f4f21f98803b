//! Edge-scrolling camera.
//!
//! The player roams freely in the middle half of the screen. Pushing into the
//! left or right quarter freezes the player and scrolls the world instead.

/// Result of one scroll decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollDecision {
    /// Horizontal displacement for every scrollable entity next tick.
    pub world_shift: f32,
    /// Horizontal speed the player should move at next tick.
    pub player_speed: f32,
}

/// Dead-zone scroll controller. Stateless: the decision depends only on the
/// player's current screen position and direction.
#[derive(Debug, Clone, Copy)]
pub struct ScrollController {
    /// Screen width in pixels.
    pub screen_width: f32,
    /// World shift magnitude while scrolling.
    pub scroll_speed: f32,
    /// Player speed restored outside the scroll zones.
    pub player_speed: f32,
}

impl ScrollController {
    pub fn new(screen_width: f32, scroll_speed: f32, player_speed: f32) -> Self {
        Self {
            screen_width,
            scroll_speed,
            player_speed,
        }
    }

    /// Right edge of the left scroll zone.
    pub fn left_threshold(&self) -> f32 {
        self.screen_width / 4.0
    }

    /// Left edge of the right scroll zone.
    pub fn right_threshold(&self) -> f32 {
        self.screen_width - self.screen_width / 4.0
    }

    pub fn decide(&self, center_x: f32, direction_x: f32) -> ScrollDecision {
        if center_x < self.left_threshold() && direction_x < 0.0 {
            ScrollDecision {
                world_shift: self.scroll_speed,
                player_speed: 0.0,
            }
        } else if center_x > self.right_threshold() && direction_x > 0.0 {
            ScrollDecision {
                world_shift: -self.scroll_speed,
                player_speed: 0.0,
            }
        } else {
            ScrollDecision {
                world_shift: 0.0,
                player_speed: self.player_speed,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ScrollController {
        ScrollController::new(1200.0, 8.0, 8.0)
    }

    #[test]
    fn left_zone_moving_left_scrolls_right() {
        let d = controller().decide(100.0, -1.0);
        assert_eq!(d.world_shift, 8.0);
        assert_eq!(d.player_speed, 0.0);
    }

    #[test]
    fn right_zone_moving_right_scrolls_left() {
        let d = controller().decide(1000.0, 1.0);
        assert_eq!(d.world_shift, -8.0);
        assert_eq!(d.player_speed, 0.0);
    }

    #[test]
    fn edge_zone_without_push_does_not_scroll() {
        let c = controller();
        assert_eq!(c.decide(100.0, 0.0).world_shift, 0.0);
        assert_eq!(c.decide(100.0, 1.0).world_shift, 0.0);
        assert_eq!(c.decide(1000.0, -1.0).world_shift, 0.0);
        assert_eq!(c.decide(1000.0, -1.0).player_speed, 8.0);
    }

    #[test]
    fn dead_zone_never_scrolls_and_restores_speed() {
        let c = controller();
        let mut x = c.left_threshold();
        while x <= c.right_threshold() {
            for dir in [-1.0, 0.0, 1.0] {
                let d = c.decide(x, dir);
                assert_eq!(d.world_shift, 0.0, "x={x} dir={dir}");
                assert_eq!(d.player_speed, 8.0);
            }
            x += 12.5;
        }
    }

    #[test]
    fn thresholds_are_quarters() {
        let c = controller();
        assert_eq!(c.left_threshold(), 300.0);
        assert_eq!(c.right_threshold(), 900.0);
    }
}
