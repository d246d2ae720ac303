mod date_ops;
mod global_stats;
mod period_stats;

pub use date_ops::{days_elapsed, days_remaining};
pub use global_stats::compute_global_stats;
pub use period_stats::{
    amount_to_break_even, compute_period_stats, refund_amount, saved_amount, stats_for_period,
};
