//! A scientific calculator with standard and scientific keypads.
//!
//! The calculator state is a plain value driven by a pure reducer
//! ([`controller::reduce`]); the terminal and GPUI front ends only render it
//! and translate input into [`controller::Button`]s.

pub mod calculator;
pub mod config;
pub mod controller;
pub mod layout;
pub mod repl;
#[cfg(feature = "gui")]
pub mod ui;
