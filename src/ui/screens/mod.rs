mod error;
mod loading;

pub(crate) use error::render_error;
pub(crate) use loading::render_loading;
