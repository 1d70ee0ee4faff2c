use rand::{rngs::StdRng, Rng, SeedableRng};

use heatscale::*;

fn random_scales(seed: u64, n: usize) -> Vec<ColorScale> {
    let mut rng = StdRng::seed_from_u64(seed);
    let distr = ScaleDistribution(1..12usize);
    (0..n).map(|_| rng.sample(&distr)).collect()
}

#[test]
fn clamps_below_start() {
    let mut rng = StdRng::seed_from_u64(1);
    for scale in random_scales(7, 200) {
        let idx = -rng.random_range(0.0..1000.0f64);
        let first = scale.colors()[0];
        assert_eq!(map_color(scale.colors(), idx), Ok(first.into()));
    }
}

#[test]
fn clamps_above_end() {
    let mut rng = StdRng::seed_from_u64(2);
    for scale in random_scales(8, 200) {
        let idx = (scale.len() - 1) as f64 + rng.random_range(0.0..1000.0f64);
        let last = *scale.colors().last().unwrap();
        assert_eq!(map_color(scale.colors(), idx), Ok(last.into()));
    }
}

#[test]
fn integer_positions_hit_scale_colors() {
    for scale in random_scales(9, 200) {
        for (i, &c) in scale.colors().iter().enumerate() {
            assert_eq!(scale.sample(i as f64), Rgb::from(c));
        }
    }
}

#[test]
fn interpolated_components_stay_between_neighbours() {
    let mut rng = StdRng::seed_from_u64(3);
    for scale in random_scales(10, 200).into_iter().filter(|s| s.len() > 1) {
        let idx = rng.random_range(0.0..(scale.len() - 1) as f64);
        let lo = scale.colors()[idx.floor() as usize];
        let hi = scale.colors()[idx.ceil() as usize];
        let c = scale.sample(idx).to_array();
        for (k, (a, b)) in <[u8; 3]>::from(lo).into_iter().zip(<[u8; 3]>::from(hi)).enumerate() {
            let (a, b) = (a as f64, b as f64);
            assert!(c[k] >= a.min(b) && c[k] <= a.max(b), "{c:?} outside {lo:?}..{hi:?}");
        }
    }
}

#[test]
fn single_color_scale_ignores_index() {
    let scale = ColorScale::new([Color::rgb(10, 20, 30)]).unwrap();
    for idx in [-5.0, 0.0, 0.5, 100.0, f64::NAN] {
        assert_eq!(scale.sample(idx), Rgb::new(10., 20., 30.));
    }
}
