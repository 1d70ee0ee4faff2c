use rand::{distr::{uniform::SampleRange, Distribution, StandardUniform}, Rng};

use super::color::*;
use super::scale::*;

impl Distribution<Color> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        Color::rgb(rng.random(), rng.random(), rng.random())
    }
}

/// Samples color scales whose length is drawn from the given range.
#[derive(Clone)]
pub struct ScaleDistribution<RL: SampleRange<usize>>(pub RL);

impl<RL: SampleRange<usize> + Clone> Distribution<ColorScale> for ScaleDistribution<RL> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ColorScale {
        let num_colors = rng.random_range(self.0.clone()).max(1);
        let colors = rng.random_iter().take(num_colors);
        match ColorScale::new(colors) {
            Ok(scale) => scale,
            Err(_) => unreachable!("at least one color is sampled"),
        }
    }
}
