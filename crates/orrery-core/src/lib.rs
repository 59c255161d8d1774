pub mod constants;
pub mod coordinates;

pub use coordinates::{CartesianPosition, SphericalPosition};

#[cfg(test)]
mod tests;
