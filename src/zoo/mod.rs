//! Preset patterns and the two file encodings for grids.
//!
//! The ASCII (`.gol`) and binary (`.bgol`) formats are plain encode/decode
//! wrappers around [`Grid`](crate::Grid); each is available over any
//! `Read`/`Write` and over file paths.

pub mod ascii;
pub mod binary;
pub mod patterns;

pub use ascii::{load_ascii, read_ascii, save_ascii, write_ascii};
pub use binary::{load_binary, read_binary, save_binary, write_binary};
pub use patterns::{glider, light_weight_spaceship, r_pentomino};
