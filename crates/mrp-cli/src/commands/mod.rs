pub mod dispatch;
pub mod init;
pub mod project;
pub mod run;
pub mod shared;
pub mod source;
pub mod step;
