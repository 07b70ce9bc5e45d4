pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;
pub mod user;

pub use formatting::describe_status;
pub use formatting::mins2readable;
