//! per-network station lists and fare tables. data, not logic: values are
//! hand-entered reference tables, loaded once at startup and never
//! mutated.

pub mod ankeng_lrt;
pub mod danhai_lrt;
pub mod new_taipei_metro;
pub mod taipei_metro;
pub mod taoyuan_metro;
pub mod tra;
