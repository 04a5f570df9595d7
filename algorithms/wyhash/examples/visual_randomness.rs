//! Visual Randomness Generator example.
//!
//! Generates two BMP images to eyeball the output of both entry points:
//! 1. Hash Path: hashes the 16-byte `(x, y)` coordinate with `wyhash`.
//! 2. Counter Path: mixes `x` and `y` directly with `wyhash64`.
//!
//! Generates:
//! - `wyhash_randomness_hash.bmp`
//! - `wyhash_randomness_wyhash64.bmp`
//!
//! Any visible structure (bands, diagonals, tiles) indicates a mixing defect.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs::File;
use std::io::{BufWriter, Write};
use wyhash::{wyhash, wyhash64, Secret};

fn main() -> std::io::Result<()> {
    let width = 1024;
    let height = 1024;
    let secret = Secret::default();

    // --- 1. HASH PATH (16-byte input) ---
    println!(" Generating wyhash Randomness Map (16 bytes)...");
    generate_image("wyhash_randomness_hash.bmp", width, height, |x, y| {
        let mut buf = [0u8; 16];
        buf[0..8].copy_from_slice(&u64::from(x).to_le_bytes());
        buf[8..16].copy_from_slice(&u64::from(y).to_le_bytes());
        wyhash(&buf, 0, &secret)
    })?;

    // --- 2. COUNTER PATH (stateless mixer) ---
    println!(" Generating wyhash64 Randomness Map...");
    generate_image("wyhash_randomness_wyhash64.bmp", width, height, |x, y| {
        wyhash64(u64::from(x), u64::from(y))
    })?;

    println!("✅ Done! Generated two images.");
    Ok(())
}

fn generate_image<F>(filename: &str, width: u32, height: u32, hasher: F) -> std::io::Result<()>
where
    F: Fn(u32, u32) -> u64,
{
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    // 54-byte header, 3 bytes per pixel, rows already 4-byte aligned at 1024 wide
    let image_size = width * height * 3;
    let file_size = 54 + image_size;

    // File Header (14 bytes)
    writer.write_all(b"BM")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?;
    writer.write_all(&54u32.to_le_bytes())?;

    // Info Header (40 bytes), negative height for top-down rows
    writer.write_all(&40u32.to_le_bytes())?;
    writer.write_all(&(width as i32).to_le_bytes())?;
    writer.write_all(&(-(height as i32)).to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?;
    writer.write_all(&24u16.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?;
    writer.write_all(&image_size.to_le_bytes())?;
    writer.write_all(&[0u8; 16])?;

    for y in 0..height {
        for x in 0..width {
            // Low three bytes as BGR
            let [b, g, r, ..] = hasher(x, y).to_le_bytes();
            writer.write_all(&[b, g, r])?;
        }
    }

    writer.flush()
}
