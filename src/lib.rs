pub mod colouring;
pub mod math;
pub mod renderer;
pub mod util;
