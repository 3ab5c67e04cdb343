mod mock_chat_client;
mod ollama_chat_client;

pub use mock_chat_client::*;
pub use ollama_chat_client::*;
