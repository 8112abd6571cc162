use anyhow::{Context, Result};

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

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }
}

const HEADER: [&str; 12] = [
    "EVENT_UNIQUE_ID",
    "OCC_DATE",
    "OCC_YEAR",
    "OCC_MONTH",
    "OCC_DOW",
    "OCC_HOUR",
    "DIVISION",
    "FATALITIES",
    "INJURY_COLLISIONS",
    "NEIGHBOURHOOD",
    "x",
    "y",
];

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const DAYS: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];
const DIVISIONS: [&str; 6] = ["D11", "D12", "D14", "D22", "D31", "D52"];
const NEIGHBOURHOODS: [&str; 5] = [
    "Annex",
    "High Park North",
    "Kensington-Chinatown",
    "Moss Park",
    "Yonge-Bay Corridor",
];

/// Usage: `generate_sample [PATH] [ROWS]`
fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let output_path = args.next().unwrap_or_else(|| "sample_incidents.csv".to_string());
    let rows: u64 = match args.next() {
        Some(n) => n.parse().with_context(|| format!("row count '{n}' is not a number"))?,
        None => 500,
    };

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(HEADER)?;

    for i in 0..rows {
        let year = 2014 + rng.below(10);
        let month = rng.below(12) as usize;
        let day = 1 + rng.below(28);
        let injury = rng.below(4) == 0;
        // Web Mercator metres around downtown Toronto.
        let x = -8_838_000.0 + rng.next_f64() * 25_000.0;
        let y = 5_410_000.0 + rng.next_f64() * 20_000.0;

        writer.write_record([
            format!("GO-{year}{i:07}"),
            format!("{year}-{:02}-{day:02}", month + 1),
            year.to_string(),
            MONTHS[month].to_string(),
            rng.pick(&DAYS).to_string(),
            rng.below(24).to_string(),
            rng.pick(&DIVISIONS).to_string(),
            u8::from(injury && rng.below(20) == 0).to_string(),
            if injury { "YES" } else { "NO" }.to_string(),
            rng.pick(&NEIGHBOURHOODS).to_string(),
            format!("{x:.3}"),
            format!("{y:.3}"),
        ])?;
    }
    writer.flush().context("flushing sample CSV")?;

    println!("Wrote {rows} incidents to {output_path}");
    Ok(())
}
