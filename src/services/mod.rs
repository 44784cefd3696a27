pub mod fact_parser;
pub mod fact_shuffler;
pub mod fake_locator;
pub mod trivia_service;

pub use fact_parser::parse_facts;
pub use fact_shuffler::{shuffle_facts, shuffle_facts_with};
pub use fake_locator::{locate_fake, NO_FAKE_INDEX};
pub use trivia_service::TriviaService;
