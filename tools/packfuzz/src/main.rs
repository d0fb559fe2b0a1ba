// CLASSIFICATION: COMMUNITY
// Filename: main.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-08-26

//! Standalone fuzz driver feeding mutated MessagePack streams to the decoder.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tinypack_codec::{fuzz::fuzz_decode, PackWriter};

#[derive(Parser)]
struct Args {
    /// Optional corpus file decoded before the random campaign.
    #[clap(long)]
    corpus: Option<PathBuf>,
    /// Seed for the random stream generator.
    #[clap(long, default_value_t = 0xC0DE_C0DE)]
    seed: u64,
    /// Number of generated streams to mutate and decode.
    #[clap(long, default_value_t = 4096)]
    iterations: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.corpus {
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading corpus {}", path.display()))?;
        fuzz_decode(&bytes);
        println!("packfuzz: corpus {} decoded without panic", path.display());
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    for _ in 0..args.iterations {
        let mut stream = random_stream(&mut rng);
        mutate_stream(&mut rng, &mut stream);
        fuzz_decode(&stream);
    }
    println!(
        "packfuzz: {} mutated streams decoded without panic (seed {:#x})",
        args.iterations, args.seed
    );
    Ok(())
}

fn random_stream<R: Rng>(rng: &mut R) -> Vec<u8> {
    let mut writer = PackWriter::new();
    for _ in 0..rng.random_range(1..16) {
        match rng.random_range(0..8) {
            0 => writer.write_nil(),
            1 => writer.write_array_header(rng.random_range(0..1_000_000)),
            2 => writer.write_map_header(rng.random_range(0..1_000_000)),
            3 => {
                let len = rng.random_range(0..300);
                let text: String = (0..len).map(|_| rng.random_range('a'..='z')).collect();
                writer.write_str(Some(&text));
            }
            4 => writer.write_u64(rng.random()),
            5 => writer.write_i64(rng.random()),
            6 => writer.write_f32(rng.random()),
            _ => writer.write_f64(rng.random()),
        }
    }
    writer.into_bytes()
}

fn mutate_stream<R: Rng>(rng: &mut R, stream: &mut Vec<u8>) {
    match rng.random_range(0..4) {
        0 => {
            if !stream.is_empty() {
                let index = rng.random_range(0..stream.len());
                stream[index] = rng.random();
            }
        }
        1 => {
            let new_len = rng.random_range(0..=stream.len());
            stream.truncate(new_len);
        }
        2 => {
            let tail_len = rng.random_range(1..32);
            let mut tail = vec![0u8; tail_len];
            rng.fill_bytes(&mut tail);
            stream.extend_from_slice(&tail);
        }
        _ => {} // leave the well-formed stream intact
    }
}
