pub mod deserializers;
pub mod extract;
