mod check_args;
mod runner;

pub use check_args::{
    DEFAULT_HEADERS_DIR, RunOptions, TemplateSource, color_choice_to_mode, default_headers_dir,
};
pub use runner::{CheckContext, run_check, run_check_impl, run_check_with_context};
