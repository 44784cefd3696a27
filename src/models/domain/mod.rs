pub mod fact;
pub use fact::Fact;
