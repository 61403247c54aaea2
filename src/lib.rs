//! Pokedex Dashboard - Pokemon dataset analytics and battle prediction

pub mod analytics;
pub mod combat;
pub mod core;
pub mod data;
pub mod pokedex;
