//! Infrastructure adapters for services outside the process.

pub mod storage;
