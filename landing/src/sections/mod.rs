// Landing page sections, top to bottom

mod call_to_action;
mod cta_button;
mod features;
mod footer;
mod hero;
mod nav;
mod stats;

pub use call_to_action::CallToAction;
pub use cta_button::CtaButton;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use stats::Stats;
