mod input_utils;

pub use input_utils::sanitize_value_input;
