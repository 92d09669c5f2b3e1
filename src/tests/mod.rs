mod utils;

use lazy_static::lazy_static;
use utils::parse_env;

// Test environment variables
lazy_static! {
    pub static ref STATISTICS: bool =
        parse_env("STATISTICS", false).expect("Failed to parse STATISTICS");
    /// Number of repetitions for each timed scenario (only repeated if statistics are enabled)
    pub static ref NUM_REPEAT: usize = if *STATISTICS {
        parse_env("NUM_REPEAT", 1).expect("Failed to parse NUM_REPEAT")
    } else {
        1
    };
    /// Number of keys folded into one batch
    pub static ref BATCH_SIZE: usize =
        parse_env("BATCH_SIZE", 4).expect("Failed to parse BATCH_SIZE");
    /// Number of values committed under each key
    pub static ref BASIS_LEN: usize =
        parse_env("BASIS_LEN", 8).expect("Failed to parse BASIS_LEN");
}
