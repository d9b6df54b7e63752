//! Command implementations for the cogniscreen CLI

pub mod analyze;
pub mod dispatch;
pub mod features;
mod helpers;
