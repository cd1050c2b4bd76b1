//! Shopfloor OEE & Production Deviation Engine
//!
//! This crate reconciles planned cycle-time budgets against real RFID
//! station-dwell telemetry to produce utilization, bottleneck and
//! financial-deviation metrics for a production fleet.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
