/// Render layer — tags every draw call with the group it came from.
///
/// `Level::run` draws back-to-front in exactly this order, so a renderer that
/// sorts by layer gets the same picture as one that draws in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum RenderLayer {
    BackgroundPalms = 0,
    ForegroundPalms = 1,
    Enemies = 2,
    Terrain = 3,
    Crates = 4,
    Grass = 5,
    Coins = 6,
    Dust = 7,
    Goal = 8,
    Player = 9,
}

impl RenderLayer {
    /// Total number of render layers.
    pub const COUNT: usize = 10;

    /// Convert from a u8 value to a RenderLayer.
    /// Returns None if the value is out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::BackgroundPalms),
            1 => Some(Self::ForegroundPalms),
            2 => Some(Self::Enemies),
            3 => Some(Self::Terrain),
            4 => Some(Self::Crates),
            5 => Some(Self::Grass),
            6 => Some(Self::Coins),
            7 => Some(Self::Dust),
            8 => Some(Self::Goal),
            9 => Some(Self::Player),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Decorative passes drawn by the host (sky, clouds, water).
/// The level only tells the host when to draw them and how far the world moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Sky,
    Clouds,
    Water,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_back_to_front() {
        assert!(RenderLayer::BackgroundPalms < RenderLayer::ForegroundPalms);
        assert!(RenderLayer::Enemies < RenderLayer::Terrain);
        assert!(RenderLayer::Coins < RenderLayer::Dust);
        assert!(RenderLayer::Goal < RenderLayer::Player);
    }

    #[test]
    fn u8_conversion() {
        for val in 0..RenderLayer::COUNT as u8 {
            let layer = RenderLayer::from_u8(val).unwrap();
            assert_eq!(layer.as_u8(), val);
        }
        assert!(RenderLayer::from_u8(10).is_none());
    }
}
