pub mod contact;
pub mod geometry;
pub mod physics;
pub mod runner;
pub mod scroll;
pub mod time;
