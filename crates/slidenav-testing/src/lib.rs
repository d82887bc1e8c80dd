//! Testing utilities and harness for SlideNav
//!
//! Everything here runs headless: [`FakeDom`] stands in for the container,
//! wrapper and slide elements, [`FakeArrows`] for the trigger buttons, and
//! [`SlideRobot`] drives gestures against a synthetic clock.

pub mod fake_arrows;
pub mod fake_dom;
pub mod logging;
pub mod robot;
pub mod robot_assertions;

pub use fake_arrows::FakeArrows;
pub use fake_dom::{FakeDom, SlideId};
pub use logging::init_test_logging;
pub use robot::SlideRobot;

pub mod prelude {
    pub use crate::fake_arrows::FakeArrows;
    pub use crate::fake_dom::{FakeDom, SlideId};
    pub use crate::logging::init_test_logging;
    pub use crate::robot::SlideRobot;
    pub use crate::robot_assertions;
}
