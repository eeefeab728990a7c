//! Color assignment: background suppression and palette generation.
//!
//! [`assign`] turns a [`ComponentRegistry`] into a [`ColorMap`]: the
//! largest component and label 0 resolve to the caller's background
//! color, everything else draws from a deterministic [`Palette`].

use indexmap::IndexMap;

use crate::label::{ComponentRegistry, LabelId};

// ── Color ───────────────────────────────────────────────────────────

/// An opaque RGBA color value. The core has no opinion on how it is
/// rendered; it is plain data handed to the renderer collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    /// Fully opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }
}

/// Label id → color, including label 0.
pub type ColorMap = IndexMap<LabelId, Color>;

// ── Palette ─────────────────────────────────────────────────────────

/// A deterministic, order-stable palette generator.
///
/// Both variants satisfy the same contract: `generate(n)` returns
/// exactly `n` colors, the same every time, with `generate(0)` empty
/// and `generate(1)` a degenerate single-point palette.
#[derive(Clone, Debug, PartialEq)]
pub enum Palette {
    /// Evenly interpolate across a fixed list of anchor colors:
    /// index `i` maps to `t = i/(n-1)` scaled into anchor space, with
    /// per-channel linear interpolation between the two surrounding
    /// anchors.
    Anchors(Vec<Color>),
    /// Rotate hue at `360*i/n` degrees with fixed saturation and value.
    HueWheel {
        /// Saturation in `[0, 1]`.
        saturation: f32,
        /// Value (brightness) in `[0, 1]`.
        value: f32,
    },
}

impl Default for Palette {
    /// The stock anchor ramp: blue → cyan → green → yellow → red.
    fn default() -> Self {
        Palette::Anchors(vec![
            Color::rgb(0x00, 0x66, 0xff),
            Color::rgb(0x00, 0xff, 0xff),
            Color::rgb(0x66, 0xff, 0x00),
            Color::rgb(0xff, 0xff, 0x00),
            Color::rgb(0xff, 0x00, 0x00),
        ])
    }
}

impl Palette {
    /// Generate `n` colors.
    ///
    /// `n = 0` yields an empty vector; `n = 1` collapses to the ramp
    /// start (or hue 0) rather than dividing by `n - 1 = 0`.
    pub fn generate(&self, n: usize) -> Vec<Color> {
        match self {
            Palette::Anchors(anchors) => (0..n)
                .map(|i| {
                    let t = if n <= 1 {
                        0.0
                    } else {
                        i as f32 / (n - 1) as f32
                    };
                    sample_anchors(anchors, t)
                })
                .collect(),
            Palette::HueWheel { saturation, value } => (0..n)
                .map(|i| {
                    let hue = 360.0 * i as f32 / n as f32;
                    hsv_to_rgb(hue, *saturation, *value)
                })
                .collect(),
        }
    }
}

/// Interpolate the anchor list at `t` in `[0, 1]`.
fn sample_anchors(anchors: &[Color], t: f32) -> Color {
    let (first, rest) = match anchors.split_first() {
        Some(split) => split,
        None => return Color::BLACK,
    };
    if rest.is_empty() {
        return *first;
    }

    let pos = t.clamp(0.0, 1.0) * (anchors.len() - 1) as f32;
    let lo = (pos.floor() as usize).min(anchors.len() - 2);
    let frac = pos - lo as f32;
    let (a, b) = (anchors[lo], anchors[lo + 1]);

    let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * frac).round() as u8;
    Color {
        r: lerp(a.r, b.r),
        g: lerp(a.g, b.g),
        b: lerp(a.b, b.b),
        a: lerp(a.a, b.a),
    }
}

/// Convert HSV (`hue` in degrees, `s`/`v` in `[0, 1]`) to RGBA.
fn hsv_to_rgb(hue: f32, s: f32, v: f32) -> Color {
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);
    let h = hue.rem_euclid(360.0) / 60.0;

    let c = v * s;
    let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let ch = |f: f32| ((f + m) * 255.0).round() as u8;
    Color::rgb(ch(r), ch(g), ch(b))
}

// ── assign ──────────────────────────────────────────────────────────

/// Map every label to a color: label 0 and the largest component get
/// `background`, the rest draw palette colors in ascending label order.
///
/// Ties for largest component break toward the smallest label id. An
/// empty registry reduces to `{0: background}`.
pub fn assign(registry: &ComponentRegistry, palette: &Palette, background: Color) -> ColorMap {
    let background_label = registry
        .iter()
        .fold(None::<(LabelId, usize)>, |best, (&id, &size)| match best {
            Some((_, best_size)) if size <= best_size => best,
            _ => Some((id, size)),
        })
        .map(|(id, _)| id);

    let mut map = ColorMap::with_capacity(registry.len() + 1);
    map.insert(0, background);

    let foreground: Vec<LabelId> = registry
        .keys()
        .copied()
        .filter(|&id| Some(id) != background_label)
        .collect();
    let colors = palette.generate(foreground.len());

    if let Some(id) = background_label {
        map.insert(id, background);
    }
    for (id, color) in foreground.into_iter().zip(colors) {
        map.insert(id, color);
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn registry(entries: &[(LabelId, usize)]) -> ComponentRegistry {
        entries.iter().copied().collect()
    }

    #[test]
    fn largest_component_is_background() {
        let reg = registry(&[(1, 3), (2, 10), (3, 1)]);
        let map = assign(&reg, &Palette::default(), Color::BLACK);

        assert_eq!(map[&0], Color::BLACK);
        assert_eq!(map[&2], Color::BLACK);
        assert_ne!(map[&1], Color::BLACK);
        assert_ne!(map[&3], Color::BLACK);
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn size_tie_breaks_to_smallest_label() {
        let reg = registry(&[(1, 5), (2, 5), (3, 5)]);
        let map = assign(&reg, &Palette::default(), Color::WHITE);
        assert_eq!(map[&1], Color::WHITE);
        assert_ne!(map[&2], Color::WHITE);
    }

    #[test]
    fn empty_registry_reduces_to_background_only() {
        let map = assign(&registry(&[]), &Palette::default(), Color::BLACK);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&0], Color::BLACK);
    }

    #[test]
    fn single_component_gets_background_and_no_palette_call_panics() {
        // n = 0 foreground labels: the palette must return an empty
        // sequence without any divide-by-zero.
        let map = assign(&registry(&[(1, 7)]), &Palette::default(), Color::BLACK);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1], Color::BLACK);
    }

    #[test]
    fn two_components_exercise_single_point_palette() {
        // n = 1 foreground label: degenerate palette, still one color.
        let map = assign(&registry(&[(1, 7), (2, 2)]), &Palette::default(), Color::BLACK);
        assert_eq!(map[&2], Color::rgb(0x00, 0x66, 0xff));
    }

    #[test]
    fn anchor_palette_hits_endpoints() {
        let palette = Palette::default();
        let colors = palette.generate(5);
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0], Color::rgb(0x00, 0x66, 0xff));
        assert_eq!(colors[4], Color::rgb(0xff, 0x00, 0x00));
    }

    #[test]
    fn anchor_palette_midpoint_interpolates() {
        let palette = Palette::Anchors(vec![Color::rgb(0, 0, 0), Color::rgb(200, 100, 50)]);
        let colors = palette.generate(3);
        assert_eq!(colors[1], Color::rgb(100, 50, 25));
    }

    #[test]
    fn empty_anchor_list_degrades_to_black() {
        let palette = Palette::Anchors(vec![]);
        assert_eq!(palette.generate(2), vec![Color::BLACK, Color::BLACK]);
    }

    #[test]
    fn hue_wheel_is_distinct_and_stable() {
        let palette = Palette::HueWheel {
            saturation: 1.0,
            value: 1.0,
        };
        let a = palette.generate(12);
        let b = palette.generate(12);
        assert_eq!(a, b);

        let mut unique = a.clone();
        unique.sort_by_key(|c| (c.r, c.g, c.b));
        unique.dedup();
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn hue_wheel_primaries() {
        let palette = Palette::HueWheel {
            saturation: 1.0,
            value: 1.0,
        };
        let colors = palette.generate(3);
        assert_eq!(colors[0], Color::rgb(255, 0, 0));
        assert_eq!(colors[1], Color::rgb(0, 255, 0));
        assert_eq!(colors[2], Color::rgb(0, 0, 255));
    }

    proptest! {
        /// The color map always covers label 0 plus every registry
        /// label, and the max-size label always maps to background.
        #[test]
        fn map_covers_all_labels(sizes in proptest::collection::vec(1usize..50, 0..12)) {
            let reg: ComponentRegistry = sizes
                .iter()
                .enumerate()
                .map(|(i, &s)| ((i + 1) as LabelId, s))
                .collect();
            let map = assign(&reg, &Palette::default(), Color::WHITE);

            prop_assert_eq!(map.len(), reg.len() + 1);
            prop_assert_eq!(map[&0], Color::WHITE);
            if let Some(max) = reg.values().max().copied() {
                let first_max = *reg.iter().find(|(_, &s)| s == max).unwrap().0;
                prop_assert_eq!(map[&first_max], Color::WHITE);
            }
        }
    }
}
