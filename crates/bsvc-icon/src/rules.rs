//! # Icon Rules
//!
//! The four structural rules a service icon must satisfy. Each rule is a
//! predicate over a parsed [`SvgDocument`]; a failed rule becomes one
//! [`IconViolation`] for the offending service.

use std::fmt;

use bsvc_core::ServiceId;

use crate::document::SvgDocument;
use crate::validate::SvgParseError;
use crate::viewbox::ViewBox;

/// A house-style rule for service icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconRule {
    /// The root element must be `<svg>`.
    RootElement,
    /// The `viewBox` must be present and square.
    SquareShape,
    /// The root must not carry `width` or `height`.
    NoIntrinsicSize,
    /// The root must carry `fill="currentColor"`.
    CurrentColorFill,
}

impl IconRule {
    /// Every rule, in the order checks run and violations are reported.
    pub const ALL: [IconRule; 4] = [
        IconRule::RootElement,
        IconRule::SquareShape,
        IconRule::NoIntrinsicSize,
        IconRule::CurrentColorFill,
    ];

    /// Human-readable description used in violation messages.
    pub fn description(self) -> &'static str {
        match self {
            IconRule::RootElement => "Parsed SVG object is undefined",
            IconRule::SquareShape => "The icon must have a square shape.",
            IconRule::NoIntrinsicSize => "Svg tag must not contain 'width' and 'height' attributes",
            IconRule::CurrentColorFill => "Svg tag must contain 'fill=\"currentColor\"' attribute.",
        }
    }

    /// Returns true if the document satisfies this rule.
    pub fn is_satisfied_by(self, doc: &SvgDocument<'_>) -> bool {
        match self {
            IconRule::RootElement => doc.is_svg(),
            // A missing or malformed viewBox cannot be square.
            IconRule::SquareShape => doc
                .attribute("viewBox")
                .and_then(ViewBox::parse)
                .is_some_and(|vb| vb.is_square()),
            IconRule::NoIntrinsicSize => !doc.has_attribute("width") && !doc.has_attribute("height"),
            IconRule::CurrentColorFill => doc.attribute("fill") == Some("currentColor"),
        }
    }
}

impl fmt::Display for IconRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// One rule failed by one service icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconViolation {
    /// Service whose icon failed the rule.
    pub service_id: ServiceId,
    /// The rule that failed.
    pub rule: IconRule,
}

impl fmt::Display for IconViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.service_id, self.rule.description())
    }
}

/// Check one icon against every rule.
///
/// All rules run regardless of earlier failures, so the result lists every
/// problem with the icon, in [`IconRule::ALL`] order.
///
/// # Errors
///
/// Returns [`SvgParseError`] if the markup is not well-formed XML. No rule
/// can be evaluated without a parsed tree.
pub fn check_icon(service_id: &ServiceId, svg: &str) -> Result<Vec<IconViolation>, SvgParseError> {
    let doc = SvgDocument::parse(svg).map_err(|e| SvgParseError {
        service_id: service_id.clone(),
        reason: e.to_string(),
    })?;

    Ok(IconRule::ALL
        .into_iter()
        .filter(|rule| !rule.is_satisfied_by(&doc))
        .map(|rule| IconViolation {
            service_id: service_id.clone(),
            rule,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ServiceId {
        ServiceId::new(s).unwrap()
    }

    fn rules_failed(svg: &str) -> Vec<IconRule> {
        check_icon(&id("acme"), svg)
            .unwrap()
            .into_iter()
            .map(|v| v.rule)
            .collect()
    }

    #[test]
    fn valid_icon_has_no_violations() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10" fill="currentColor"><path d="M0 0h10v10H0z"/></svg>"#;
        assert!(rules_failed(svg).is_empty());
    }

    #[test]
    fn non_square_view_box() {
        let svg = r#"<svg viewBox="0 0 10 20" fill="currentColor"/>"#;
        assert_eq!(rules_failed(svg), [IconRule::SquareShape]);
    }

    #[test]
    fn missing_view_box_fails_square_rule() {
        let svg = r#"<svg fill="currentColor"/>"#;
        assert_eq!(rules_failed(svg), [IconRule::SquareShape]);
    }

    #[test]
    fn width_or_height_fails_sizing_rule() {
        let with_width = r#"<svg viewBox="0 0 24 24" width="24" fill="currentColor"/>"#;
        let with_height = r#"<svg viewBox="0 0 24 24" height="24" fill="currentColor"/>"#;
        let with_both = r#"<svg viewBox="0 0 24 24" width="24" height="24" fill="currentColor"/>"#;
        assert_eq!(rules_failed(with_width), [IconRule::NoIntrinsicSize]);
        assert_eq!(rules_failed(with_height), [IconRule::NoIntrinsicSize]);
        assert_eq!(rules_failed(with_both), [IconRule::NoIntrinsicSize]);
    }

    #[test]
    fn fill_must_be_exactly_current_color() {
        let missing = r#"<svg viewBox="0 0 24 24"/>"#;
        let wrong = r##"<svg viewBox="0 0 24 24" fill="#000"/>"##;
        let wrong_case = r#"<svg viewBox="0 0 24 24" fill="currentcolor"/>"#;
        assert_eq!(rules_failed(missing), [IconRule::CurrentColorFill]);
        assert_eq!(rules_failed(wrong), [IconRule::CurrentColorFill]);
        assert_eq!(rules_failed(wrong_case), [IconRule::CurrentColorFill]);
    }

    #[test]
    fn non_svg_root_still_runs_other_rules() {
        let svg = r#"<g viewBox="0 0 24 24" fill="currentColor"/>"#;
        assert_eq!(rules_failed(svg), [IconRule::RootElement]);
    }

    #[test]
    fn prefixed_svg_root_fails_root_rule() {
        let svg = r#"<s:svg xmlns:s="http://www.w3.org/2000/svg" viewBox="0 0 1 1" fill="currentColor"/>"#;
        assert_eq!(rules_failed(svg), [IconRule::RootElement]);
    }

    #[test]
    fn every_rule_reported_in_order() {
        let svg = r#"<img width="1" viewBox="0 0 1 2"/>"#;
        assert_eq!(rules_failed(svg), IconRule::ALL);
    }

    #[test]
    fn violation_message_format() {
        let violations = check_icon(&id("acme"), r#"<svg viewBox="0 0 10 20" fill="currentColor"/>"#).unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].to_string(), "acme : The icon must have a square shape.");
    }

    #[test]
    fn malformed_markup_is_parse_error() {
        let err = check_icon(&id("broken"), "<svg viewBox=\"0 0 1 1\"").unwrap_err();
        assert_eq!(err.service_id.as_str(), "broken");
        assert!(err.to_string().contains("broken"));
    }
}
