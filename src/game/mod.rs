// Game modules: the world interfaces actors consume, and the actors

pub mod actors;
pub mod world;
