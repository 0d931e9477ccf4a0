#![forbid(unsafe_code)]

pub mod model;
pub mod render;
pub mod surface;
pub mod table;
pub mod theme;

pub use render::{
    DisplayRow, MalformedRowPolicy, ProfileRenderer, RenderConfig, RenderedProfile, Section, Tone,
};
pub use surface::{PlainTextSurface, RenderSurface, TextStyle};
pub use table::{ColumnDescriptor, ColumnWidth, Table};
pub use theme::{ThemeConfig, ThemeDraft, ThemeError};
