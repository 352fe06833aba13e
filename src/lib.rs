//! Coastal erosion map generation library
//!
//! Re-exports modules for use by the binary and tools.

pub mod color;
pub mod decay;
pub mod geojson;
pub mod map;
pub mod overview;
pub mod risk;
pub mod timeseries;
pub mod yucatan;
