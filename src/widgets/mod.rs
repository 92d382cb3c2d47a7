
pub mod anchor;
pub mod carousel;
pub mod contact;
pub mod counter;
pub mod filter;
pub mod header;
pub mod reveal;
