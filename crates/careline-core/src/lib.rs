pub mod engine;
pub mod intent;
pub mod questionnaire;
pub mod reply;
pub mod sentiment;
pub mod store;

pub use engine::*;
pub use intent::*;
pub use questionnaire::*;
pub use reply::*;
pub use sentiment::*;
pub use store::*;
