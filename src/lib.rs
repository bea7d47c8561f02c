//! Looping fireworks show simulation core.
//!
//! Rockets launch from a ground line, climb under mild drag, burst into one
//! of several particle patterns, and the particles fade under gravity while
//! trails leave smoke behind. The crate owns the per-tick simulation
//! ([`simulator::Simulator::advance`]) and frame assembly
//! ([`compositor::FrameCompositor::collect`]); window creation, painting and
//! frame scheduling belong to the embedding driver, which calls one advance
//! and one collect per frame.
//!
//! All randomness flows through an injectable [`rng::RandomSource`], so a
//! fixed seed replays an identical show.

pub mod color;
pub mod compositor;
pub mod config;
pub mod explosion;
pub mod pattern;
pub mod rng;
pub mod rocket;
pub mod simulator;
pub mod skyline;
pub mod stars;
