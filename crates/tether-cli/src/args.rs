//! Command-line argument definitions for the Tether CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the generated demo graph, the number
//! of simulation steps, where frames are written, configuration file
//! selection, and logging verbosity.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the Tether layout tool
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of vertices in the generated graph
    #[arg(short = 'n', long, default_value_t = 30)]
    pub vertices: usize,

    /// Probability that any two vertices are connected
    #[arg(short = 'p', long, default_value_t = 0.10)]
    pub edge_probability: f64,

    /// Seed of the random number generator
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// Number of simulation steps, overriding the configuration file
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Directory receiving the SVG frames
    #[arg(short, long, default_value = "frames")]
    pub output_dir: PathBuf,

    /// Only write the frame after the last step
    #[arg(long)]
    pub final_only: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["tether"]);
        assert_eq!(args.vertices, 30);
        assert_eq!(args.edge_probability, 0.10);
        assert_eq!(args.seed, 0);
        assert_eq!(args.iterations, None);
        assert_eq!(args.output_dir, PathBuf::from("frames"));
        assert!(!args.final_only);
        assert_eq!(args.config, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "tether",
            "--vertices",
            "8",
            "--edge-probability",
            "0.5",
            "--seed",
            "42",
            "--iterations",
            "12",
            "--output-dir",
            "out",
            "--final-only",
            "--config",
            "tether.toml",
        ]);
        assert_eq!(args.vertices, 8);
        assert_eq!(args.edge_probability, 0.5);
        assert_eq!(args.seed, 42);
        assert_eq!(args.iterations, Some(12));
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert!(args.final_only);
        assert_eq!(args.config, Some(PathBuf::from("tether.toml")));
    }
}
