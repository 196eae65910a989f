//! Generate a Schulte table worksheet with specified size and seed.
//!
//! Usage: cargo run --release --example generate -- <size> [out_name] [dir] [seed]
//!
//! Example:
//!   cargo run --release --example generate -- 5 worksheet . 42

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use schulte_table::generate;
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let size: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        eprintln!("Usage: {} <size> [out_name] [dir] [seed]", args[0]);
        std::process::exit(1);
    });

    let out_name = args.get(2).map(String::as_str).unwrap_or("schulte");
    let dir = args.get(3).map(String::as_str).unwrap_or(".");
    let seed: u64 = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    match generate(size, out_name, dir, &mut rng) {
        Ok(path) => println!("Saved {}", path.display()),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
