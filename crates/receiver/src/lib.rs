mod api;
mod infra;
mod run;
#[cfg(test)]
mod tests;

pub use run::{run, start};
