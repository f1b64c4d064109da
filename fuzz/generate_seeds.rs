#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PBM 5x3, ASCII tokens with a comment
    let p1 = b"P1\n# checker\n5 3\n0 1 0 1 0\n1 0 1 0 1\n0 1 0 1 0\n";
    fs::write(format!("{dir}/p1_5x3.pbm"), p1).unwrap();

    // PGM 3x2, ASCII
    let p2 = b"P2\n3 2\n255\n0 128 255\n64 32 16\n";
    fs::write(format!("{dir}/p2_3x2.pgm"), p2).unwrap();

    // PPM 2x1, ASCII, maxval on the dimension line
    let p3 = b"P3\n2 1 15\n15 0 0 0 0 15\n";
    fs::write(format!("{dir}/p3_2x1.ppm"), p3).unwrap();

    // PBM 4x2, character rows
    let p4 = b"P4\n4 2\n1001\n0110\n";
    fs::write(format!("{dir}/p4_4x2.pbm"), p4).unwrap();

    // PGM 3x2, raw
    let p5 = b"P5\n3 2\n255\n\x00\x40\x80\xc0\xff\x64";
    fs::write(format!("{dir}/p5_3x2.pgm"), p5).unwrap();

    // PPM 2x2, raw
    let p6 = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/p6_2x2.ppm"), p6).unwrap();

    println!("Seeds written to {dir}/");
}
