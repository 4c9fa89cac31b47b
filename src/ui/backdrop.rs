use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed speckle pattern drawn behind the playfield. Seeded, so the same
/// settings always give the same sky.
#[derive(Clone, Debug, Default)]
pub struct Backdrop {
    pub specks: Vec<(f64, f64)>,
}

impl Backdrop {
    pub fn generate(seed: u64, count: usize, screen_width: i32, screen_height: i32) -> Self {
        if screen_width <= 0 || screen_height <= 0 {
            return Self::default();
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let specks = (0..count)
            .map(|_| {
                (
                    rng.gen_range(0.0..screen_width as f64),
                    rng.gen_range(0.0..screen_height as f64),
                )
            })
            .collect();
        Self { specks }
    }
}
