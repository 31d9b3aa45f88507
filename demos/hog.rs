//! Computes HoG descriptors for an image and saves a rendering of the cell histograms.
//!
//! `cargo run --example hog <input image> [scale]`
//!
//! Set `RUST_LOG=debug` to see the grid layout as it is built.

use hog_grid::intensity::to_gray8;
use hog_grid::{Grid, HogOptions};
use image::open;
use log::info;
use std::env;
use std::path::Path;

fn save_hog_image(input: &Path, options: HogOptions, scale: u32, output_name: &str) {
    let image =
        open(input).unwrap_or_else(|e| panic!("Could not load image at {:?}: {}", input, e));

    let grid = Grid::new(&image, options).unwrap_or_else(|e| panic!("Invalid options: {}", e));
    info!(
        "{}: {}x{} cells, {} descriptor vectors of length {}",
        output_name,
        grid.dim_x(),
        grid.dim_y(),
        grid.descriptor_vectors().len(),
        grid.descriptor_vectors().first().map_or(0, |v| v.len())
    );

    let hog = to_gray8(&grid.create_hog_image(scale));
    hog.save(input.with_file_name(output_name)).unwrap();
}

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let arg = args.next().unwrap_or_else(|| panic!("Please enter an input file"));
    let scale = args
        .next()
        .map(|s| s.parse::<u32>().expect("scale must be a positive integer"))
        .unwrap_or(2);
    assert!(scale > 0, "scale must be a positive integer");
    let path = Path::new(&arg);

    let unsigned = HogOptions::default();
    let signed = HogOptions {
        ignore_sign: false,
        orientations: 18,
        ..unsigned
    };

    save_hog_image(path, unsigned, scale, "hog_unsigned.png");
    save_hog_image(path, signed, scale, "hog_signed.png");
}
