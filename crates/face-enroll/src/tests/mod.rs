mod config;
mod console_reader;
mod host_command;
mod preview_store;
mod renderer;
