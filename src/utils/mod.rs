pub mod observer;
pub mod scroll;
pub mod validate;
