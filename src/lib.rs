pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod image_editor;
pub mod interactive;
