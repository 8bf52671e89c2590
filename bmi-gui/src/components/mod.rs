mod form;
mod result_panel;
mod warning;

pub use form::{action_buttons, measurement_form};
pub use result_panel::result_panel;
pub use warning::invalid_input_warning;
