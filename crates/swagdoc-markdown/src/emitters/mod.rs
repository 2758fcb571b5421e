pub mod endpoint;
pub mod page;
pub mod samples;
pub mod tables;
pub mod typedefs;
