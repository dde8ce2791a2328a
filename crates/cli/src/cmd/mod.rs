mod apply;
mod show;

pub use apply::cmd_apply;
pub use show::cmd_show;
