pub mod model;
pub mod synthesizer;
