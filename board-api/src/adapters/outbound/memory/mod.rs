mod entries;

pub use entries::InMemoryEntryRepository;
