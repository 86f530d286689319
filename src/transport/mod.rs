pub mod greeting;
pub mod http;
