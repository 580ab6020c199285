//! Carnage - single-room terminal dungeon crawler.
//!
//! This module exposes the simulation core for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod combat;
pub mod constants;
pub mod enemy_ai;
pub mod entity;
pub mod grid;
pub mod input;
pub mod inventory;
pub mod room;
pub mod session;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
