mod facilities;
mod hero;
mod home;
mod objectives;
mod programs;
mod promo;

pub use facilities::FacilitiesSection;
pub use hero::Hero;
pub use home::Home;
pub use objectives::ObjectivesSection;
pub use programs::ProgramsSection;
pub use promo::ProgramsPromo;
