//! Default solution list and guess dictionary
//!
//! Generated by `build.rs` from `data/answers.txt` and `data/allowed.txt`.
//!
//! Both are reduced lists: the answers stay below the default
//! `sample_threshold`, so strategic ranking over them is never sampled.
//! Pass full lists with `--answers` and `--dictionary`, or lower
//! `--sample-threshold`, to exercise sampling.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
