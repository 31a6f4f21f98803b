pub mod animation;
pub mod dust;
pub mod enemy;
pub mod group;
pub mod layer;
pub mod player;
pub mod sprite;
pub mod tile;
