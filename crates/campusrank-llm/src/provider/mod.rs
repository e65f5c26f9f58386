//! Text generation backends

mod mock;
mod openai;

pub use mock::MockProvider;
pub use openai::OpenAIProvider;
