//! Subs counter engine: page decoding, markup reading and timer-driven
//! animation of every dashboard widget.
mod dashboard;
mod decode;
mod driver;
mod markup;
mod source;
mod types;
mod widget;

pub use dashboard::{run_dashboard_blocking, Dashboard, DashboardSettings};
pub use decode::{decode_page, DecodeError, DecodedPage};
pub use driver::{run_counter, ChannelDisplaySink, DisplaySink};
pub use markup::{MarkupError, Page};
pub use source::{load_page, EngineError};
pub use types::{AnimationOutcome, DisplayEvent};
pub use widget::{read_widget, WidgetInput};
pub use tokio_util::sync::CancellationToken;
