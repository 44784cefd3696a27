pub mod request;
pub mod response;

pub use request::GenerateFactsRequest;
pub use response::{FactDto, GenerateFactsResponse};
