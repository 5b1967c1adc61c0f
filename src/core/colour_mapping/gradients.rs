use crate::core::colour_mapping::gradient::{Gradient, GradientStop};
use crate::core::data::colour::Colour;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientKind {
    #[default]
    Flame,
    BlackToWhite,
}

impl GradientKind {
    pub const ALL: &'static [Self] = &[Self::Flame, Self::BlackToWhite];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Flame => "Flame",
            Self::BlackToWhite => "Black to white",
        }
    }

    #[must_use]
    pub fn gradient(self) -> Gradient {
        match self {
            Self::Flame => flame(),
            Self::BlackToWhite => black_to_white(),
        }
    }
}

impl std::fmt::Display for GradientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Stops of the built-in palette used when no gradient image is given.
const FLAME_STOPS: [(f64, Colour); 5] = [
    (0.0, Colour::rgb(0, 0, 0)),
    (0.25, Colour::rgb(128, 0, 0)),
    (0.5, Colour::rgb(255, 96, 0)),
    (0.75, Colour::rgb(255, 208, 32)),
    (1.0, Colour::rgb(255, 255, 255)),
];

fn from_fixed_stops(stops: &[(f64, Colour)]) -> Gradient {
    let stops: Vec<GradientStop> = stops
        .iter()
        .map(|&(position, colour)| GradientStop::new(position, colour))
        .collect();

    Gradient::new(stops).expect("built-in gradient stops are valid")
}

/// Black through dark red, orange and yellow to white.
#[must_use]
pub fn flame() -> Gradient {
    from_fixed_stops(&FLAME_STOPS)
}

#[must_use]
pub fn black_to_white() -> Gradient {
    from_fixed_stops(&[
        (0.0, Colour::rgb(0, 0, 0)),
        (1.0, Colour::rgb(255, 255, 255)),
    ])
}
