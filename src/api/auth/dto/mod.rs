pub mod responses;
pub mod token_request;
