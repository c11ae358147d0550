// Application layer: the two callers of the fitment engine.

pub mod automated;
pub mod interactive;
