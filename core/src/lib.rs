pub mod arithmetic;
pub mod drill;
