// Simple color struct, created from an unsigned 32 representing RRGGBB,
// with a separate opacity so fades and edge intensities keep full precision

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::from_u32(0xffffff);
    pub const BLACK: Color = Color::from_u32(0x000000);

    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, alpha: f64) -> Color {
        Color {
            a: alpha.max(0.0).min(1.0),
            ..self
        }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Flash color used for the synaptic firing effect.
pub const FLASH: Color = Color::WHITE;
/// Background painted translucently every frame for the trail fade.
pub const BACKGROUND: Color = Color::BLACK;
/// Hue of proximity edges.
pub const LINK: Color = Color::from_u32(0x38bdf8);

/// The fixed particle palette, cyan through violet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    Cyan,
    Indigo,
    Violet,
    Teal,
}

impl Palette {
    pub const ALL: [Palette; 4] = [Palette::Cyan, Palette::Indigo, Palette::Violet, Palette::Teal];

    pub fn random<R: Rng>(rng: &mut R) -> Palette {
        Palette::ALL[rng.gen_range(0, Palette::ALL.len())]
    }

    pub fn color(self) -> Color {
        match self {
            Palette::Cyan => Color::from_u32(0x38bdf8),
            Palette::Indigo => Color::from_u32(0x818cf8),
            Palette::Violet => Color::from_u32(0xc084fc),
            Palette::Teal => Color::from_u32(0x22d3ee),
        }
    }
}
