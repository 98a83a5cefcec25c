#![no_std]
pub mod color;
pub mod keycodes;
