// Copyright 2026 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0

//! Fallback colors for segments that don't specify one.

use rand::Rng;

/// Supplies display colors, one per request, in segment order.
///
/// Injectable so tests and themed charts can swap the ambient RNG for a
/// fixed sequence.
pub trait ColorSource {
    fn next_color(&mut self) -> String;
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Uniform random `#RRGGBB` colors from the thread RNG. Not seeded;
/// repeated runs produce different colors.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomColors;

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> String {
        let mut rng = rand::thread_rng();
        let mut color = String::with_capacity(7);
        color.push('#');
        for _ in 0..6 {
            color.push(HEX_DIGITS[rng.gen_range(0..16)] as char);
        }
        color
    }
}

// https://iamkate.com/data/12-bit-rainbow/
const RAINBOW: [&str; 12] = [
    "#881166", "#AA3355", "#CC6666", "#EE9944", "#EEDD00", "#99DD55", "#44DD88", "#22CCBB",
    "#00BBCC", "#0099CC", "#3366BB", "#663399",
];

/// Cycles through a fixed palette.
#[derive(Clone, Debug)]
pub struct PaletteColors {
    palette: Vec<String>,
    next: usize,
}

impl PaletteColors {
    /// The palette must be non-empty.
    pub fn new(palette: Vec<String>) -> Self {
        assert!(!palette.is_empty(), "empty palette");
        PaletteColors { palette, next: 0 }
    }

    /// The 12-bit rainbow palette.
    pub fn rainbow() -> Self {
        Self::new(RAINBOW.iter().map(|c| (*c).to_string()).collect())
    }
}

impl ColorSource for PaletteColors {
    fn next_color(&mut self) -> String {
        let color = self.palette[self.next % self.palette.len()].clone();
        self.next += 1;
        color
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn is_hex_color(color: &str) -> bool {
        color.len() == 7
            && color.starts_with('#')
            && color[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase() && c.is_ascii_hexdigit())
    }

    #[test]
    fn random_colors_are_uppercase_hex() {
        let mut colors = RandomColors;
        for _ in 0..100 {
            let color = colors.next_color();
            assert!(is_hex_color(&color), "bad color {color}");
        }
    }

    #[test]
    fn palette_cycles_in_order() {
        let mut colors = PaletteColors::new(vec!["#111111".into(), "#222222".into()]);
        assert_eq!(colors.next_color(), "#111111");
        assert_eq!(colors.next_color(), "#222222");
        assert_eq!(colors.next_color(), "#111111");
    }

    #[test]
    fn rainbow_is_well_formed() {
        let mut colors = PaletteColors::rainbow();
        for _ in 0..12 {
            assert!(is_hex_color(&colors.next_color()));
        }
    }
}
