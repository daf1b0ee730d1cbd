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

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

// (city, state, lat, lon)
const CITIES: &[(&str, &str, f64, f64)] = &[
    ("Seattle", "WA", 47.61, -122.33),
    ("Phoenix", "AZ", 33.45, -112.07),
    ("Dallas", "TX", 32.78, -96.80),
    ("Chicago", "IL", 41.88, -87.63),
    ("Atlanta", "GA", 33.75, -84.39),
    ("Newark", "NJ", 40.74, -74.17),
    ("Anchorage", "AK", 61.22, -149.90),
    ("Honolulu", "HI", 21.31, -157.86),
];

const FACILITY_TYPES: &[&str] = &[
    "Traditional Sortable",
    "Traditional Non-Sort",
    "IXD",
    "Delivery Station",
    "Sort Center",
    "Air Gateway",
];

const STATUSES: &[&str] = &["Active", "Active", "Active", "Idle", "Closed"];

const STREETS: &[&str] = &["Main St", "Commerce Dr", "Industrial Pkwy", "Airport Rd"];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "facilities.csv";

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record([
        "site_name",
        "address",
        "latitude",
        "longitude",
        "status",
        "facility_type",
    ])?;

    let mut rows = 0;
    for (i, &(city, state, lat, lon)) in CITIES.iter().enumerate() {
        for j in 0..6 {
            let code = format!("{}{}{}", &state[..1], i + 1, j + 1);
            let address = format!(
                "{} {}, {city}, {state}",
                100 + rng.next_u64() % 9900,
                rng.pick(STREETS)
            );
            let lat = format!("{:.5}", lat + rng.uniform(-0.4, 0.4));
            let lon = format!("{:.5}", lon + rng.uniform(-0.4, 0.4));
            writer.write_record([
                format!("{code} {city}"),
                address,
                lat,
                lon,
                rng.pick(STATUSES).to_string(),
                rng.pick(FACILITY_TYPES).to_string(),
            ])?;
            rows += 1;
        }
    }

    // Rows the loader is expected to drop.
    writer.write_record(["X1 Unknown", "", "N/A", "-75.0", "Active", "IXD"])?;
    writer.write_record(["X2 London", "1 Strand, London", "51.50735", "-0.12776", "Active", "IXD"])?;
    writer.write_record(["X3 Sydney", "", "-33.86882", "151.20929", "Idle", "Sort Center"])?;
    rows += 3;

    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} facilities to {output_path}");
    Ok(())
}
