// src/utils/mod.rs
mod geo;
mod interp;

pub(crate) use geo::*;
pub(crate) use interp::*;
