pub mod anchor;
pub mod gesture;
pub mod pointer;
pub mod reveal;
pub mod scroll;
