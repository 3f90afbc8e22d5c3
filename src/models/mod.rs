pub mod agent;
pub mod credential;
pub mod department;
pub mod interaction;
pub mod message;
pub mod ui;

pub use agent::*;
pub use credential::*;
pub use department::*;
pub use interaction::*;
pub use message::*;
pub use ui::*;
