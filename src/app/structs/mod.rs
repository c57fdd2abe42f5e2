pub mod json_from_request;
pub mod path_from_request;
