mod entries;

pub use entries::PostgresEntryAdapter;
