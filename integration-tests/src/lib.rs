//! Integration tests package lib
#![allow(dead_code)]

mod utils;

#[cfg(test)]
mod startup_flow_test;
