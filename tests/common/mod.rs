#[cfg(test)]
mod fixture;
pub use fixture::Fixture;

#[cfg(test)]
mod genmap_runner;
pub use genmap_runner::GenmapRunnerBuilder;
