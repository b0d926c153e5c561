//! Generates the grid tables of exp(-i / scale) used by the range-reduced kernels.
//!
//! Values are computed in f64 and rounded once to f32. Writing them with `{:?}`
//! keeps the shortest decimal that parses back to the same f32.

use std::io::Write;

#[derive(Clone, Copy)]
struct Table {
    name: &'static str,
    scale: u32,
    len: usize,
    doc: &'static str,
}

const TABLES: [Table; 5] = [
    Table {
        name: "EXP_UNIT",
        scale: 1,
        len: 16,
        doc: "exp(-i) for i in 0..16.",
    },
    Table {
        name: "EXP_SIXTEENTH",
        scale: 16,
        len: 256,
        doc: "exp(-i / 16) for i in 0..256, covering (-16, 0].",
    },
    Table {
        name: "EXP_64TH",
        scale: 64,
        len: 1024,
        doc: "exp(-i / 64) for i in 0..1024, covering (-16, 0].",
    },
    Table {
        name: "EXP_256TH",
        scale: 256,
        len: 4096,
        doc: "exp(-i / 256) for i in 0..4096, covering (-16, 0].",
    },
    Table {
        name: "EXP_UNIT_FRACTION",
        scale: 16,
        len: 17,
        doc: "exp(-i / 16) for i in 0..=16, covering [-1, 0] with both endpoints.",
    },
];

fn main() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let dst_path = std::path::Path::new(&out_dir).join("exp_tables.rs");
    let mut file = std::io::BufWriter::new(std::fs::File::create(dst_path).unwrap());

    for Table {
        name,
        scale,
        len,
        doc,
    } in TABLES
    {
        writeln!(file, "#[doc = {doc:?}]").unwrap();
        writeln!(
            file,
            "pub static {name}: GridTable<{len}> = GridTable::new({scale}.0, ["
        )
        .unwrap();
        for i in 0..len {
            let value = (-(i as f64) / scale as f64).exp() as f32;
            writeln!(file, "    {value:?},").unwrap();
        }
        writeln!(file, "]);").unwrap();
        writeln!(file).unwrap();
    }

    file.flush().unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
