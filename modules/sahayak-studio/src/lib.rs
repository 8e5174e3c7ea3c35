pub mod content;
pub mod error;
pub mod prompts;
pub mod slug;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod traits;
pub mod video;

pub use content::ContentStudio;
pub use error::VideoError;
pub use slug::make_slug;
pub use traits::{TextGenerator, VideoJobApi};
pub use video::{Sleeper, ThreadSleeper, VideoJobDriver, VideoStudio};
