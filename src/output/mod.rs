//! Artifact serializers
//!
//! Two fixed formats, both byte-exact by contract:
//! - plain (ASCII) PBM, `P1` header, one line of 256 digits per row
//! - per-category CSV with a `word,pixel[0..=65535]` header

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::raster::{Canvas, HEIGHT, WIDTH};

/// Write one canvas as a plain bi-level bitmap. No separators inside a
/// row line; viewers accept the packed digit form.
pub fn write_pbm<P: AsRef<Path>>(path: P, canvas: &Canvas) -> std::io::Result<()> {
    let mut contents = String::with_capacity(16 + (WIDTH + 1) * HEIGHT);
    contents.push_str("P1\n");
    contents.push_str(&format!("{} {}\n", WIDTH, HEIGHT));
    for y in 0..HEIGHT {
        for &pixel in canvas.row(y) {
            contents.push(if pixel == 0 { '0' } else { '1' });
        }
        contents.push('\n');
    }
    std::fs::write(path, contents)
}

/// Write one category's canvases as a CSV table: header row, then one
/// row per canvas holding the label and its 65536 row-major pixels.
pub fn write_csv<P: AsRef<Path>>(
    path: P,
    word: &str,
    canvases: &[Canvas],
) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write!(writer, "word")?;
    for i in 0..WIDTH * HEIGHT {
        write!(writer, ",pixel[{}]", i)?;
    }
    writeln!(writer)?;

    for canvas in canvases {
        write!(writer, "{}", word)?;
        for &pixel in canvas.pixels() {
            write!(writer, ",{}", pixel)?;
        }
        writeln!(writer)?;
    }

    writer.flush()
}
