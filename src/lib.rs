//! lubimyczytac-rss
//!
//! Serves RSS 2.0 feeds built from lubimyczytac.pl author pages.
//!
//! # Modules
//!
//! - `lubimyczytac`: page fetching and author extraction
//! - `rss`: RSS document model and XML writer
//! - `routes`: HTTP routes and the application router

pub mod config;
pub mod error;
pub mod lubimyczytac;
pub mod routes;
pub mod rss;
pub mod state;
