pub mod airfoil;
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod export;
pub mod geometry;
pub mod loft;
pub mod serialize;
pub mod wing;
