//! Front-end state: the board view, the post composer and their rendering.

pub mod board;
pub mod composer;
pub mod mvi;
pub mod render;
