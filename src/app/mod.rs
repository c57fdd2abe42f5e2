pub mod controller;
pub mod cors;
pub mod database;
pub mod env;
pub mod errors;
pub mod models;
pub mod structs;
pub mod util;
