//! Core business logic layer
//!
//! This module contains the data structures, computation units, traits and
//! operations hub that form the heart of the application.

pub mod calculator;
pub mod data;
pub mod operations;
pub mod primes;
pub mod squares;
pub mod traits;
