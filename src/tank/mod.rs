// src/tank/mod.rs

// these sub-modules stay private
mod components;
mod systems;
mod plugin;

pub use plugin::TankPlugin;
