pub mod definition;
pub mod request;

pub use definition::load_definition;
pub use request::load_request;
