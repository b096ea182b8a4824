pub mod file_group;
pub mod invocation;

pub use file_group::{FileRevisionEntry, MalformedFileList};
pub use invocation::{Invocation, OpCode, TypeCode};
