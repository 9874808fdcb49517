pub mod batch;
pub mod cli_args;
pub mod clipboard;
pub mod common;
pub mod composer;
pub mod form;
pub mod settings;
pub mod utm;
