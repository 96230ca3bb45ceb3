//! Ripple Analyzer — import extraction, path resolution, and graph construction

pub mod builder;
pub mod languages;
pub mod resolver;
pub mod scanner;


pub use builder::build_graph;
pub use resolver::{Resolution, resolve};
pub use scanner::scan_project;
