//! Writes a synthetic `vehicles_us.csv` with the same columns as the real
//! listings export, including the blank cells it is known for.

use anyhow::{Context, Result};
use vehicles_dashboard::config::DATA_PATH;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

const LISTINGS: usize = 5000;

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let models = [
        "ford f-150",
        "chevrolet silverado",
        "toyota camry",
        "honda accord",
        "jeep wrangler",
        "ram 1500",
        "nissan altima",
        "subaru outback",
    ];
    let conditions = ["excellent", "good", "like new", "fair", "new", "salvage"];
    let types = ["sedan", "SUV", "pickup", "truck", "coupe", "wagon", "van", "hatchback"];
    let fuels = ["gas", "diesel", "hybrid", "electric"];

    let mut writer = csv::Writer::from_path(DATA_PATH)
        .with_context(|| format!("creating {DATA_PATH}"))?;
    writer.write_record([
        "price",
        "model_year",
        "model",
        "condition",
        "fuel",
        "odometer",
        "type",
        "days_listed",
    ])?;

    for _ in 0..LISTINGS {
        let age = rng.gauss(9.0, 5.0).clamp(0.0, 60.0).round();
        let model_year = 2019.0 - age;
        let odometer = (age * rng.gauss(12_000.0, 4_000.0).max(500.0)).round();
        let price = (35_000.0 * (-age / 8.0).exp() * rng.gauss(1.0, 0.25).max(0.1)).round();

        // Blank cells appear in the real export for these columns.
        let model_year = if rng.chance(0.07) {
            String::new()
        } else {
            format!("{model_year:.1}")
        };
        let odometer = if rng.chance(0.15) {
            String::new()
        } else {
            format!("{odometer:.1}")
        };

        writer.write_record([
            format!("{price:.0}"),
            model_year,
            rng.pick(&models).to_string(),
            rng.pick(&conditions).to_string(),
            rng.pick(&fuels).to_string(),
            odometer,
            rng.pick(&types).to_string(),
            format!("{}", (rng.next_f64() * 100.0) as u32),
        ])?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {LISTINGS} listings to {DATA_PATH}");
    Ok(())
}
