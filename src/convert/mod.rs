pub mod converter;
pub mod message;

#[cfg(test)]
mod tests;

pub use converter::*;
pub use message::*;
