//! # bsvc-icon: Service Icon Validation
//!
//! Every service in the catalog ships an inline SVG icon. The UI renders
//! these icons at arbitrary sizes and tints them with the surrounding text
//! color, which only works when the markup follows the house style:
//!
//! 1. the root element is `<svg>`;
//! 2. the `viewBox` is square;
//! 3. there is no `width` or `height` attribute on the root;
//! 4. the root carries `fill="currentColor"`.
//!
//! [`validate_icons`] checks every record against every rule and reports all
//! violations at once. Markup that is not well-formed XML is a harder fault
//! and aborts validation immediately with [`SvgParseError`].
//!
//! ## Modules
//!
//! - [`document`]: [`SvgDocument`], a typed view over parsed markup.
//! - [`viewbox`]: [`ViewBox`] parsing.
//! - [`rules`]: [`IconRule`] and the per-icon [`check_icon`].
//! - [`validate`]: batch validation and the aggregated error.

pub mod document;
pub mod rules;
pub mod validate;
pub mod viewbox;

pub use document::SvgDocument;
pub use rules::{check_icon, IconRule, IconViolation};
pub use validate::{validate_icons, IconError, IconViolations, SvgParseError};
pub use viewbox::ViewBox;
