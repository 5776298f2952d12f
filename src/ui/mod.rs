pub mod messages;
pub mod terminal;

pub use terminal::TerminalPresenter;
