pub mod messages;
pub mod mock_resolver;
pub mod mock_upstream;
