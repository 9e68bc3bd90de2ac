mod common;
mod engine;
mod registry;
mod rules;
