pub mod day_11;
