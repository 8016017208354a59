use serde::Serialize;

/// Draw surface layer: one canvas per variant on the host page.
///
/// Layers are composited back-to-front: `Main` first, the word effect layers last.
/// Each layer has a single logical writer per frame (the main draw routine or one emitter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SurfaceLayer {
    /// Background, falling words and HUD.
    #[default]
    Main = 0,
    /// Bonus-life pickup burst.
    Heart = 1,
    /// Burst fired when a word is typed correctly.
    Vanish = 2,
    /// Burst fired when a word appears.
    Spawn = 3,
    /// Burst fired when a word falls off the bottom.
    Dead = 4,
}

impl SurfaceLayer {
    /// Total number of layers.
    pub const COUNT: usize = 5;

    /// All layers in compositing order.
    pub const ALL: [SurfaceLayer; Self::COUNT] = [
        Self::Main,
        Self::Heart,
        Self::Vanish,
        Self::Spawn,
        Self::Dead,
    ];

    /// Convert from a u8 value to a SurfaceLayer.
    /// Returns None if the value is out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// CSS z-index of the host canvas. The word effect layers share one z-index.
    pub fn z_index(self) -> u32 {
        match self {
            Self::Main => 1,
            Self::Heart => 2,
            Self::Vanish | Self::Spawn | Self::Dead => 3,
        }
    }
}
