#![doc = include_str!("../README.md")]
#![allow(unused_crate_dependencies)] // false positives because there is both a library and a binary

#[macro_use]
extern crate tracing;

pub mod app;
pub mod config;
