mod abi;
pub mod address;
pub mod entities;
pub mod entity_changes;
pub mod error;
pub mod events;
pub mod host;
pub mod mapper;
mod modules;
pub mod params;
pub mod pb;
pub mod repository;
pub mod sequence;

pub use error::MappingError;
pub use mapper::EventMapper;
pub use repository::{InMemoryRepository, ReadRepository, Repository};

substreams_ethereum::init!();
