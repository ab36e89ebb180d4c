pub mod activity;
pub mod calendar;
pub mod config;
pub mod goal;
mod session;
