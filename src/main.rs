use xoroshiro_seeded::{Generator, SeedingMode};

fn main() {
    // Literal seeding reproduces the historical stream (s0 == s1).
    let mut g = Generator::create();
    g.reseed(42);
    for _ in 0..5 {
        println!("0x{:016X}", g.draw_u64());
    }

    // Decorrelated seeding for new streams that don't need compatibility.
    let mut d = Generator::seeded(42, SeedingMode::Decorrelated);
    for _ in 0..3 {
        println!("{}", d.draw_f64());
    }
}
