//! Promedio - Descriptive statistics for in-memory numeric data
//!
//! This library provides the core functionality for computing the arithmetic
//! mean, population variance, and population standard deviation of finite
//! `f64` sequences, along with input parsing and report rendering for the
//! `promedio` command-line front end.

pub mod cli;
pub mod csv_output;
pub mod descriptive;
pub mod error;
pub mod input;
pub mod json_output;
pub mod summary;
