//! MRT schedule server.
//!
//! Stations, the lines between them, and weekday/holiday timetables per
//! line, stored in SQLite and served as a small JSON API.

pub mod config;
pub mod db;
pub mod domain;
pub mod repository;
pub mod web;
