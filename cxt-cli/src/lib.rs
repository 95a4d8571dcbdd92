//! Library half of the cxt CLI: the `inspect` transforms, exposed so they
//! can be tested without spawning the binary.

pub mod transforms;
