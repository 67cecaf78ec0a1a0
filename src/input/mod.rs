//! Semantic input actions

mod input_mapper;

pub use input_mapper::{InputAction, InputMapper};
