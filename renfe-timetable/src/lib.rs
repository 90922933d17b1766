//! Renfe timetable scraper.
//!
//! Answers: "which trains run between these two Spanish stations on this
//! date, and what do they cost?" by driving the renfe.com booking search
//! in a headless browser and extracting the rendered results.

pub mod domain;
pub mod extract;
pub mod scrape;
pub mod stations;
pub mod timetable;
pub mod web;
