pub mod health_handler;
pub mod trivia_handler;

pub use health_handler::{health_check, health_check_live};
pub use trivia_handler::{generate_facts, json_config};
