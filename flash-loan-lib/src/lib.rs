mod fee;
mod rational;

pub use fee::*;
pub use rational::*;
