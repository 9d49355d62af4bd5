pub mod add;
pub mod clear;
pub mod export;
pub mod list;
pub mod path;
