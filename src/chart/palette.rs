// src/chart/palette.rs
use super::Rgb;

/// Qualitative hues, assigned to categories in order.
pub const TAB10: [Rgb; 10] = [
    Rgb(31, 119, 180),
    Rgb(255, 127, 14),
    Rgb(44, 160, 44),
    Rgb(214, 39, 40),
    Rgb(148, 103, 189),
    Rgb(140, 86, 75),
    Rgb(227, 119, 194),
    Rgb(127, 127, 127),
    Rgb(188, 189, 34),
    Rgb(23, 190, 207),
];

pub fn categorical(i: usize) -> Rgb {
    TAB10[i % TAB10.len()]
}

// Colormap anchors at t = 0, 0.125, …, 1.0
const VIRIDIS: [Rgb; 9] = [
    Rgb(68, 1, 84),
    Rgb(71, 44, 122),
    Rgb(59, 81, 139),
    Rgb(44, 113, 142),
    Rgb(33, 144, 141),
    Rgb(39, 173, 129),
    Rgb(92, 200, 99),
    Rgb(170, 220, 50),
    Rgb(253, 231, 37),
];

const MAGMA: [Rgb; 9] = [
    Rgb(0, 0, 4),
    Rgb(28, 16, 68),
    Rgb(79, 18, 123),
    Rgb(129, 37, 129),
    Rgb(181, 54, 122),
    Rgb(229, 80, 100),
    Rgb(251, 135, 97),
    Rgb(254, 194, 135),
    Rgb(252, 253, 191),
];

pub fn viridis(n: usize) -> Vec<Rgb> {
    sample(&VIRIDIS, n)
}

pub fn magma(n: usize) -> Vec<Rgb> {
    sample(&MAGMA, n)
}

/// `n` evenly spaced colors that skip both ends of the map.
fn sample(stops: &[Rgb], n: usize) -> Vec<Rgb> {
    (1..=n).map(|i| at(stops, i as f64 / (n + 1) as f64)).collect()
}

fn at(stops: &[Rgb], t: f64) -> Rgb {
    let pos = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = (lo + 1).min(stops.len() - 1);
    let f = pos - lo as f64;
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
    Rgb(
        mix(stops[lo].0, stops[hi].0),
        mix(stops[lo].1, stops[hi].1),
        mix(stops[lo].2, stops[hi].2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_maps_skip_the_ends() {
        let v = viridis(1);
        assert_eq!(v, vec![VIRIDIS[4]]);
        let m = magma(3);
        assert_eq!(m.len(), 3);
        assert_ne!(m[0], MAGMA[0]);
        assert_ne!(m[2], MAGMA[8]);
        assert!(viridis(0).is_empty());
    }

    #[test]
    fn categorical_wraps() {
        assert_eq!(categorical(10), TAB10[0]);
    }
}
