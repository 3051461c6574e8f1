pub mod slab;
pub mod stack;
