//! Sequential Bayesian updating over normalized evidence.

pub mod likelihood;
pub mod updater;

pub use likelihood::LikelihoodModel;
pub use updater::{initial_prior, BayesianUpdate, SequentialUpdater, UpdateChain};
