pub mod algorithms;
pub mod city;
pub mod config;
pub mod cost;
pub mod error;
pub mod grid;
pub mod obstacles;
pub mod render;
pub mod session;
pub mod statistics;
