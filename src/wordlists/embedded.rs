//! Embedded word list
//!
//! The default vocabulary compiled into the binary at build time.

// Generated by the build script from data/words.txt
include!(concat!(env!("OUT_DIR"), "/words.rs"));
