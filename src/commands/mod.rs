mod combine;
mod learn_lings;
mod status;

pub use combine::run_combine;
pub use learn_lings::run_learn_lings;
pub use status::run_status;
