//! Compile-time build stamp, generated by build.rs.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
