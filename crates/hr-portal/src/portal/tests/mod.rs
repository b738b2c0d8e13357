mod common;
mod store;
mod views;
