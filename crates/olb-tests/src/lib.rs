#![warn(clippy::pedantic)]

pub mod fixture;
