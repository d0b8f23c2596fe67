pub mod effect;
pub mod gate;
pub mod route;
pub mod side_event;
