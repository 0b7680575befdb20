mod analysis;
mod home;
mod risk;

pub use analysis::Analysis;
pub use home::Home;
pub use risk::Risk;
