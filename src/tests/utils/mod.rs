pub mod keys;
pub mod memory;
pub mod seed;
