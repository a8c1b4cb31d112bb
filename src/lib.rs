// ABOUTME: Library crate for the MowQuote terminal quote widget

#![allow(missing_docs)]

pub mod api;
pub mod app;
pub mod cli;
pub mod components;
pub mod models;
pub mod pricing;
pub mod theme;
