// Code generated by entgen, DO NOT EDIT.

pub mod user;
pub mod pet;

pub use user::*;
pub use pet::*;
