//! Compile-time build information shown by `threes --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
