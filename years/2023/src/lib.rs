//! Shared puzzle logic for the 2023 solvers.

pub mod schematic;
