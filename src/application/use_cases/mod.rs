mod ask_model;

pub use ask_model::*;
