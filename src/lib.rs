pub mod classifier;
pub mod hand;
pub mod io;
pub mod sim;
pub mod system;
