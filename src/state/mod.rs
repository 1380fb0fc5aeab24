// State management module.
// View state controller, consent playback, timer, filters, and aggregates.

pub mod consent;
pub mod counter;
pub mod filters;
pub mod summary;
pub mod timer;
pub mod view;

pub use consent::{ConsentPlayback, PlaybackTransition};
pub use counter::CountUp;
pub use filters::{GroupFilter, StatusFilter};
pub use timer::{PlaybackTick, PlaybackTimer};
pub use view::ViewState;
