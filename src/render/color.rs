use palette::{named, Srgb, Srgba};

/// An 8-bit sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(Srgba<u8>);

impl Color {
    pub const BLACK: Self = Self::opaque(named::BLACK);
    pub const WHITE: Self = Self::opaque(named::WHITE);
    pub const RED: Self = Self::opaque(named::RED);
    pub const GREEN: Self = Self::opaque(named::GREEN);
    pub const BLUE: Self = Self::opaque(named::BLUE);
    pub const PURPLE: Self = Self::opaque(named::PURPLE);
    /// Canvas background.
    pub const TEAL: Self = Self::opaque(Srgb::new(0, 204, 204));

    /// Fully opaque version of `color`.
    #[must_use]
    pub const fn opaque(color: Srgb<u8>) -> Self {
        Self(Srgba {
            color,
            alpha: u8::MAX,
        })
    }

    /// Returns the underlying sRGBA value.
    #[must_use]
    pub fn srgba(self) -> Srgba<u8> {
        self.0
    }
}

impl From<Srgba<u8>> for Color {
    fn from(color: Srgba<u8>) -> Self {
        Self(color)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(color: Srgb<u8>) -> Self {
        Self::opaque(color)
    }
}

impl From<Color> for Srgba<u8> {
    fn from(color: Color) -> Self {
        color.0
    }
}
