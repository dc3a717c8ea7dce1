//! Breakout - homogeneous transforms for a 2D game
//!
//! Library half of the `breakout` binary: configuration loading and the
//! headless scene driver built on [`breakout_math`].

pub mod config;
pub mod scene;

pub use breakout_math as math;
