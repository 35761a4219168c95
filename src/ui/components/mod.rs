mod button;
mod checkbox;
mod stepper;
mod switch;

pub use button::button;
pub use checkbox::checkbox;
pub use stepper::line_stepper;
pub use switch::switch;
