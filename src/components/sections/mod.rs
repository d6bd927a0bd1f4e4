pub mod about;
pub mod contact;
pub mod experience;
pub mod heading;
pub mod hero;
pub mod projects;

pub use about::About;
pub use contact::Contact;
pub use experience::ExperienceTimeline;
pub use heading::SectionHeading;
pub use hero::Hero;
pub use projects::ProjectGallery;
