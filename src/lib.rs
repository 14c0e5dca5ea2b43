pub mod experiment;
pub mod fetch;
pub mod locations;
pub mod output;
pub mod stats;
