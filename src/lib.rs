//! Fuzzy Diagnosis - Behavioral diagnosis from a 20-item questionnaire
//!
//! This crate implements a fuzzy inference engine that turns questionnaire
//! answers into one of three behavioral diagnoses, plus a thin HTTP host.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
