pub mod epoch_stats;
pub mod evaluate;
pub mod loop_fn;
pub mod termination;
pub mod train_config;

pub use epoch_stats::EpochStats;
pub use evaluate::{evaluate, EvalReport, Prediction};
pub use loop_fn::{train_loop, TrainReport};
pub use termination::{StopReason, Termination};
pub use train_config::TrainConfig;
