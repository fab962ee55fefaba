pub mod config;
pub mod empty;
pub mod error;
pub mod options;
pub mod panel;
pub mod pipeline;
pub mod samples;
pub mod search;
pub mod selection;
pub mod store;

pub use config::ListkitConfig;
pub use empty::{EmptyKind, EmptyState, EmptyStateConfig};
pub use error::{ListkitError, Result};
pub use options::{FilterFn, SelectOption, SortFn, ALL_FILTER};
pub use panel::{PanelSide, PanelSpec, PanelState};
pub use pipeline::{ListPipeline, ListPipelineBuilder, SearchField};
pub use samples::{Dataset, SampleRow};
pub use selection::{Selection, SelectionMode};
pub use store::WidthStore;
