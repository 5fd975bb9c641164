pub mod hash_map;

pub use hash_map::{BUCKET_COUNT, HashMap, hash_code_points};
