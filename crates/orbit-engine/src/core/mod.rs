pub mod collection;
pub mod timer;
