#![warn(clippy::all, rust_2018_idioms)]

pub mod codec;
pub mod document;
pub mod error;
pub mod event;
pub mod history;
pub mod input;
pub mod palette;
pub mod persistence;
pub mod shape;
pub mod tool;
pub mod toolbar;

pub use document::Document;
pub use error::{DecodeError, DocumentError, PersistenceError};
pub use event::{DocumentEvent, EventHandler, SubscriptionId};
pub use history::{History, Snapshot};
pub use input::PointerController;
pub use palette::{Color, Palette};
pub use persistence::SessionStore;
pub use shape::{Bound, Point, Shape, ShapeKind};
pub use tool::Tool;
pub use toolbar::ToolbarState;
