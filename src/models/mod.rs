pub mod openapi;
pub mod request;

pub use openapi::{
    Components, Definition, Info, MediaType, Operation, Parameter, ParameterLocation, PathItem,
    Paths, RequestBody, Schema, SchemaOrRef, SchemaType,
};
pub use request::{ParamValue, Request};
