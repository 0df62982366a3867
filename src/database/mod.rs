pub mod memory;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryTriviaStore;
pub use postgres::PgTriviaStore;
pub use store::TriviaStore;
