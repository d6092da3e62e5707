pub mod relative_time;
