pub mod disabled;
pub mod draft_llm;
pub mod store;

pub use disabled::DisabledDraftAdapter;
pub use draft_llm::OpenAiDraftAdapter;
pub use store::InMemoryContentStore;
