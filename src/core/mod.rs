pub mod aggregator;
pub mod engine;
pub mod lexicon;
pub mod profile;
pub mod types;
