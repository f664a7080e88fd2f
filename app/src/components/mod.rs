//! UI Components
//!
//! One module per page section, plus the shared toast system. Sections own
//! their local state; page-wide state (theme, scroll effects) comes in as
//! signal props from the app root.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;
pub mod testimonials;
pub mod toast;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use navbar::Navbar;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
pub use testimonials::TestimonialsSection;
pub use toast::{ToastFrame, use_toast, use_toast_provider};
