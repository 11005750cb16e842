pub mod activities;
pub mod commands;
